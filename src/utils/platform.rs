use std::process::Command;

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        return cmd;
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        return cmd;
    }
}
