/*
 * Enixnel Kernel
 *
 * A bare-metal x86_64 shell over a fixed-size in-memory namespace. Nothing is
 * ever written to a storage device: files and directories live in a static
 * entry table for as long as the machine runs.
 *
 * Boot sequence (kstart):
 *  - COM1 and the logger, so bring-up can be followed from the host
 *  - VGA console and banner
 *  - default namespace layout (bin/ markers, user/ home)
 *  - shell loop: keyboard -> line editor -> command dispatch
 *
 * Everything except kstart and the panic handler is plain no_std logic and
 * is unit-tested on the host.
 */

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod fs;
pub mod shell;
#[cfg(target_arch = "x86_64")]
#[macro_use]
pub mod utils;

/// Kernel entry point, jumped to by the boot stub with a valid stack.
#[cfg(target_os = "none")]
#[unsafe(no_mangle)]
pub extern "C" fn kstart() -> ! {
    drivers::serial::init_log_port();
    utils::logger::init();
    log::info!("Enixnel kernel starting...");

    drivers::display::init();

    let mut shell = shell::Shell::new();
    shell.print_banner(&mut *drivers::display::CONSOLE.lock());

    fs::with_namespace(|ns| {
        fs::layout::populate(ns, shell::COMMANDS.iter().map(|cmd| cmd.name));
        if !shell.change_dir(ns, fs::layout::HOME_DIR) {
            log::warn!("home directory '{}' missing, staying at root", fs::layout::HOME_DIR);
        }
    });

    shell.print_prompt(&mut *drivers::display::CONSOLE.lock());
    log::info!("Shell ready in '/{}'", shell.cwd());

    loop {
        let ch = drivers::input::keyboard::read_char_blocking();

        // Namespace before console, everywhere
        fs::with_namespace(|ns| {
            let mut console = drivers::display::CONSOLE.lock();
            shell.handle_char(ch, ns, &mut *console);
        });
    }
}

/// Logs the panic to COM1 and halts this CPU for good.
#[cfg(all(not(test), target_os = "none"))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    x86_64::instructions::interrupts::disable();

    if let Some(location) = info.location() {
        log::error!(
            "PANIC at {}:{}: {}",
            location.file(),
            location.line(),
            info.message()
        );
    } else {
        log::error!("PANIC: {}", info.message());
    }

    loop {
        x86_64::instructions::hlt();
    }
}
