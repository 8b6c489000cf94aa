#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalUserInfo {
    pub identifier: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub local_user: LocalUserInfo,
    /// Thread the host's service is bound to, for diagnostics
    pub thread_id: Option<String>,
    pub topic: Option<String>,
    pub is_initializing: bool,
    pub is_initialized: bool,
    pub is_thread_deleted: bool,
    /// Last message the local user sent a read receipt for
    pub last_read_receipt_sent: Option<String>,
}
