// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: RegistryAuth and the captured result of a runtime command.

/// Registry authentication credentials.
#[derive(Clone)]
pub struct RegistryAuth {
    /// Username.
    pub username: String,
    /// Password or token.
    pub password: String,
    /// Registry server (e.g., "harbor.example.com").
    pub server: Option<String>,
}

impl std::fmt::Debug for RegistryAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("server", &self.server)
            .finish()
    }
}

/// Result of one runtime command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command exited successfully.
    pub success: bool,
    /// Exit code, if the process was not killed by a signal.
    pub exit_code: Option<i32>,
    /// Stdout followed by stderr.
    pub combined: String,
}

impl CommandOutput {
    /// Combined output, or the exit status when the command printed nothing.
    pub fn diagnostic(&self) -> String {
        let text = self.combined.trim();
        if !text.is_empty() {
            return text.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}
