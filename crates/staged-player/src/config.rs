/// One play session: what to open and how to set it up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Source identifier (file name or path).
    pub source: String,
    /// Argument string passed to the decoder.
    pub arguments: String,
    /// Optional flag set; `None` takes the shortcut past the flags step.
    pub flags: Option<i32>,
}
