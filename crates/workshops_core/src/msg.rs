#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Component mounted; kick off the fetch for page 1.
    Started,
    /// User clicked Previous.
    PreviousClicked,
    /// User clicked Next.
    NextClicked,
    /// User edited the filter input box.
    FilterChanged(String),
    /// Fetch completion from the engine, success or failure.
    PageFetched {
        request_id: crate::RequestId,
        result: Result<Vec<crate::Workshop>, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
