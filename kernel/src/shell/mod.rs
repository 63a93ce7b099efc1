/*
 * Enixnel Shell
 *
 * Line-oriented command interpreter over the namespace.
 * Uses:
 *  - LineEditor for input, echo and history
 *  - a Terminal for all output (VGA console at runtime, a recorder in tests)
 *
 * The shell keeps the current directory; every name argument is resolved
 * against it with path::join. The namespace itself is passed in per call so
 * the caller decides how it is locked.
 */

pub mod line_editor;
pub mod parse;

use core::fmt::{self, Write};

use crate::fs::{Namespace, path, path::PathBuf};
use line_editor::LineEditor;
use parse::{first_arg, parse_redirect, split_command};

/// Output side of the shell.
pub trait Terminal: fmt::Write {
    fn clear_screen(&mut self);

    /// Erase the character left of the cursor.
    fn backspace(&mut self);

    /// Raw bytes, e.g. file content that may not be UTF-8.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            let _ = self.write_char(char::from(byte));
        }
    }
}

/// A built-in command and its help line.
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

const fn command(name: &'static str, usage: &'static str, description: &'static str) -> Command {
    Command {
        name,
        usage,
        description,
    }
}

/// Every built-in command, in help order.
pub const COMMANDS: &[Command] = &[
    command("help", "help", "show this help"),
    command("echo", "echo <text>", "print text"),
    command("crtdir", "crtdir <name>", "create directory"),
    command("cfile", "cfile <name>", "create file"),
    command("deldir", "deldir <name>", "delete directory"),
    command("dfile", "dfile <name>", "delete file"),
    command("sdir", "sdir", "list entries in current directory"),
    command("sfile", "sfile <name>", "show file contents"),
    command("efile", "efile <expr>", "edit file (efile text > file, efile text >> file)"),
    command("clr", "clr", "clear the screen"),
    command("cd", "cd <name>", "change directory (.. for parent)"),
    command("history", "history", "show command history"),
];

pub struct Shell {
    cwd: PathBuf,
    editor: LineEditor,
}

impl Shell {
    /// A shell at the root directory with empty history.
    pub const fn new() -> Self {
        Self {
            cwd: PathBuf::new(),
            editor: LineEditor::new(),
        }
    }

    /// Current directory, "" for the root.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Move to `name` relative to the current directory.
    ///
    /// "." stays put, ".." goes to the parent (the root stays the root), any
    /// other name must resolve to an existing directory. Returns false and
    /// leaves the current directory alone otherwise.
    pub fn change_dir(&mut self, ns: &Namespace, name: &str) -> bool {
        match name {
            "." => true,
            ".." => {
                let parent = path::to_path_buf(path::parent(&self.cwd));
                self.cwd = parent;
                true
            }
            _ => {
                let target = path::join(&self.cwd, name);
                if ns.is_directory(&target) {
                    self.cwd = target;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn print_banner(&self, term: &mut dyn Terminal) {
        let _ = writeln!(term, "Welcome to Enixnel");
        let _ = writeln!(term, "-------------------");
        let _ = writeln!(term);
        let _ = writeln!(term, "Type 'help' for a list of commands.");
        let _ = writeln!(term);
    }

    pub fn print_prompt(&self, term: &mut dyn Terminal) {
        let _ = write!(term, "/{}$ ", self.cwd);
    }

    /// Handle one character from the keyboard.
    ///
    /// Line editing is delegated to the editor; a finished line is executed
    /// and followed by a fresh prompt.
    pub fn handle_char(&mut self, ch: char, ns: &mut Namespace, term: &mut dyn Terminal) {
        if let Some(line) = self.editor.handle_char(ch, term) {
            self.execute(&line, ns, term);
            self.print_prompt(term);
        }
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let (command, args) = split_command(line);
        if command.is_empty() {
            return;
        }

        log::debug!("shell: '{}' args '{}' in '/{}'", command, args, self.cwd);

        match command.as_str() {
            "help" => Self::cmd_help(term),
            "echo" => Self::cmd_echo(args, term),
            "crtdir" => self.cmd_crtdir(args, ns, term),
            "cfile" => self.cmd_cfile(args, ns, term),
            "deldir" => self.cmd_deldir(args, ns, term),
            "dfile" => self.cmd_dfile(args, ns, term),
            "sdir" => self.cmd_sdir(ns, term),
            "sfile" => self.cmd_sfile(args, ns, term),
            "efile" => self.cmd_efile(args, ns, term),
            "clr" => term.clear_screen(),
            "cd" => self.cmd_cd(args, ns, term),
            "history" => self.cmd_history(term),
            _ => {
                let _ = writeln!(term, "Unknown command: {}", command);
            }
        }
    }

    /// First argument resolved against the current directory, or None after
    /// reporting the missing name.
    fn name_arg(
        &self,
        cmd: &str,
        args: &str,
        term: &mut dyn Terminal,
    ) -> Option<(PathBuf, PathBuf)> {
        let name = first_arg(args);
        if name.is_empty() {
            let _ = writeln!(term, "{}: missing name", cmd);
            return None;
        }
        let full = path::join(&self.cwd, &name);
        Some((name, full))
    }

    fn cmd_help(term: &mut dyn Terminal) {
        let _ = writeln!(term, "Available commands:");
        for cmd in COMMANDS {
            let _ = writeln!(term, "  {:<18}- {}", cmd.usage, cmd.description);
        }
    }

    fn cmd_echo(args: &str, term: &mut dyn Terminal) {
        let _ = writeln!(term, "{}", args);
    }

    fn cmd_crtdir(&self, args: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let Some((name, full)) = self.name_arg("crtdir", args, term) else {
            return;
        };
        match ns.create_directory(&full) {
            Ok(()) => {
                let _ = writeln!(term, "Directory created: {}", name);
            }
            Err(err) => {
                let _ = writeln!(term, "crtdir: failed to create {}: {}", name, err);
            }
        }
    }

    fn cmd_cfile(&self, args: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let Some((name, full)) = self.name_arg("cfile", args, term) else {
            return;
        };
        match ns.create_file(&full) {
            Ok(()) => {
                let _ = writeln!(term, "File created: {}", name);
            }
            Err(err) => {
                let _ = writeln!(term, "cfile: failed to create {}: {}", name, err);
            }
        }
    }

    fn cmd_deldir(&self, args: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let Some((name, full)) = self.name_arg("deldir", args, term) else {
            return;
        };
        match ns.delete_directory(&full) {
            Ok(()) => {
                let _ = writeln!(term, "Directory deleted: {}", name);
            }
            Err(err) => {
                let _ = writeln!(term, "deldir: failed to delete {}: {}", name, err);
            }
        }
    }

    fn cmd_dfile(&self, args: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let Some((name, full)) = self.name_arg("dfile", args, term) else {
            return;
        };
        match ns.delete_file(&full) {
            Ok(()) => {
                let _ = writeln!(term, "File deleted: {}", name);
            }
            Err(err) => {
                let _ = writeln!(term, "dfile: failed to delete {}: {}", name, err);
            }
        }
    }

    fn cmd_sdir(&self, ns: &Namespace, term: &mut dyn Terminal) {
        let mut any = false;
        for child in ns.list_children(&self.cwd) {
            let tag = if child.is_directory { "[DIR] " } else { "[FILE]" };
            let _ = writeln!(term, "{} {}", tag, child.name);
            any = true;
        }
        if !any {
            let _ = writeln!(term, "sdir: no entries");
        }
    }

    fn cmd_sfile(&self, args: &str, ns: &Namespace, term: &mut dyn Terminal) {
        let Some((name, full)) = self.name_arg("sfile", args, term) else {
            return;
        };
        match ns.read_file(&full) {
            Ok(bytes) => {
                term.write_bytes(bytes);
                let _ = writeln!(term);
            }
            Err(_) => {
                let _ = writeln!(term, "sfile: no such file: {}", name);
            }
        }
    }

    fn cmd_efile(&self, args: &str, ns: &mut Namespace, term: &mut dyn Terminal) {
        let redirect = match parse_redirect(args) {
            Ok(redirect) => redirect,
            Err(err) => {
                let _ = writeln!(term, "efile: {}", err);
                return;
            }
        };

        let full = path::join(&self.cwd, &redirect.name);
        let offset = if redirect.append {
            ns.lookup(&full).map_or(0, |entry| entry.size())
        } else {
            0
        };

        if let Err(err) = ns.write_file(&full, redirect.text.as_bytes(), redirect.append) {
            let _ = writeln!(term, "efile: failed to write {}: {}", redirect.name, err);
            return;
        }

        let size = ns.lookup(&full).map_or(0, |entry| entry.size());
        let kept = size.saturating_sub(offset);
        if kept < redirect.text.len() {
            let _ = writeln!(
                term,
                "efile: {} is full, kept {} of {} bytes",
                redirect.name,
                kept,
                redirect.text.len()
            );
        }
    }

    fn cmd_cd(&mut self, args: &str, ns: &Namespace, term: &mut dyn Terminal) {
        let name = first_arg(args);
        if name.is_empty() {
            let _ = writeln!(term, "cd: missing name");
            return;
        }
        if !self.change_dir(ns, &name) {
            let _ = writeln!(term, "cd: no such directory: {}", name);
        }
    }

    fn cmd_history(&self, term: &mut dyn Terminal) {
        for (i, line) in self.editor.history().iter().enumerate() {
            let _ = writeln!(term, "  {}: {}", i + 1, line);
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
