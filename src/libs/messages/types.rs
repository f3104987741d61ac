#[derive(Debug, Clone)]
pub enum Message {
    // === INSTALL MESSAGES ===
    FetchingReleaseFeed,
    DownloadingAsset(String),  // asset name
    InstallingRelease(String), // tag
    InstallCompleted(String),  // tag
    AlreadyInstalled(String),  // install path
    InstallFailed(String),     // error

    // === UPDATE MESSAGES ===
    AlreadyCurrent(String), // tag
    UpdateAvailable(String),
    UpdateCompleted(String),         // tag
    UpdateDeclined,
    UpdateCheckFailed(String), // error
    RestartRequired,
    RunUpdateHint,

    // === STATUS MESSAGES ===
    StatusMode(String),
    StatusInstalledVersion(String),
    StatusVersionUnknown,
    StatusNotInstalled,
    StatusBinaryPath(String),
    StatusStdlibPath(String),
    StatusBackgroundChecks(bool),

    // === SESSION MESSAGES ===
    SessionStarted(u32), // PID
    SessionStopped,
    ServerExited(String), // exit status
    ManualBinaryNotConfigured,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,

    // === PROMPTS ===
    PromptServerMode,
    PromptBinaryPath,
    PromptStdlibPath,
    PromptCheckUpdates,
    PromptConfirmUpdate(String), // tag

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
