/// Request lifecycle events a surface goes through.
#[derive(Debug, Clone)]
pub enum SurfaceIntent {
    /// A new request started. Valid from every state.
    Request,
    /// Data arrived and content was rendered.
    Loaded,
    /// The request failed.
    Failed { message: String },
    /// Show an informational notice.
    Notice { message: String },
}
