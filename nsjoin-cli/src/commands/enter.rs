//! Enter command implementation
//!
//! Opens namespace descriptors, joins them through the library surface, then
//! runs a command inside. This module uses `unsafe` for fork(), which only
//! happens when the PID namespace is among the joined kinds - membership of
//! that kind applies to children, not the calling process.

use std::ffi::CString;
use std::fs::File;
use std::os::fd::AsRawFd;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};
use tracing::{debug, info};

use nsjoin::{JoinRequest, NamespaceKind};

pub fn execute(
    pid: Option<u32>,
    path: Option<&Path>,
    kinds: &[NamespaceKind],
    command: &[String],
) -> Result<()> {
    if let Some(path) = path {
        if kinds.len() != 1 {
            bail!("--path takes exactly one --kind, got {}", kinds.len());
        }
        join_file(path, kinds[0])?;
    } else if let Some(pid) = pid {
        // Joined in the order given on the command line.
        for kind in kinds {
            let ns_path = format!("/proc/{pid}/ns/{}", kind.as_str());
            join_file(Path::new(&ns_path), *kind)?;
        }
    } else {
        bail!("either --pid or --path is required");
    }

    let joined: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
    info!("✅ Joined namespaces: {}", joined.join(", "));

    if kinds.contains(&NamespaceKind::Pid) {
        run_forked(command)
    } else {
        exec_command(command)
    }
}

/// Open a namespace file and join it
fn join_file(path: &Path, kind: NamespaceKind) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    // The request borrows the descriptor; `file` stays open until after the
    // call returns.
    let code = JoinRequest::new(file.as_raw_fd(), kind)
        .join()
        .with_context(|| format!("failed to join {kind} namespace from {}", path.display()))?;

    debug!(kind = %kind, code, "namespace joined");
    Ok(())
}

/// Fork so the PID namespace applies, exec in the child, wait in the parent
fn run_forked(command: &[String]) -> Result<()> {
    // SAFETY: the child calls nothing but exec-family functions and exit.
    match unsafe { fork() }.context("fork failed")? {
        ForkResult::Parent { child } => {
            let exit_code = wait_for_child(child)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
        ForkResult::Child => {
            if let Err(e) = exec_command(command) {
                eprintln!("❌ {e:#}");
                std::process::exit(127);
            }
            unreachable!("exec_command returns only on error");
        }
    }
}

/// Wait for the child to exit and report its exit code
fn wait_for_child(child: Pid) -> Result<i32> {
    debug!("waiting for child (PID {child})");

    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, exit_code)) => return Ok(exit_code),
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                // Exit codes for signals: 128 + signal number
                return Ok(128 + signal as i32);
            }
            Ok(status) => debug!("child status: {status:?}"),
            Err(nix::errno::Errno::EINTR) => {}
            Err(e) => bail!("wait failed: {e}"),
        }
    }
}

/// Replace this process with the requested command
fn exec_command(command: &[String]) -> Result<()> {
    let (program, args) = build_command(command);

    let program_cstring =
        CString::new(program.as_bytes()).context("invalid program name")?;

    // Build args as CStrings (include program name as args[0])
    let mut all_args = vec![program.clone()];
    all_args.extend(args);

    let args_cstrings = all_args
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<std::result::Result<Vec<CString>, _>>()
        .context("invalid argument")?;

    debug!(program = %program, "calling execvp");

    // Exec replaces this process with the command; never returns on success.
    match nix::unistd::execvp(&program_cstring, &args_cstrings) {
        Ok(_) => unreachable!("execvp returned on success"),
        Err(e) => Err(anyhow::anyhow!("failed to execute {program}: {e}")),
    }
}

/// Build the command with proper arguments
///
/// Defaults to an interactive shell when no command is given.
fn build_command(command: &[String]) -> (String, Vec<String>) {
    if command.is_empty() {
        return ("/bin/sh".to_string(), vec!["-i".to_string()]);
    }

    let program = command[0].clone();
    let args = command[1..].to_vec();

    (program, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_default_shell() {
        let (prog, args) = build_command(&[]);
        assert_eq!(prog, "/bin/sh");
        assert_eq!(args, vec!["-i"]);
    }

    #[test]
    fn test_build_command_with_args() {
        let cmd = vec![
            "/bin/sh".to_string(),
            "-c".to_string(),
            "echo hi".to_string(),
        ];
        let (prog, args) = build_command(&cmd);
        assert_eq!(prog, "/bin/sh");
        assert_eq!(args, vec!["-c", "echo hi"]);
    }

    #[test]
    fn test_build_command_bare_program() {
        let cmd = vec!["echo".to_string(), "hello".to_string()];
        let (prog, args) = build_command(&cmd);
        assert_eq!(prog, "echo");
        assert_eq!(args, vec!["hello"]);
    }
}
