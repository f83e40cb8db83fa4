#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the collaborator for one page of workshops. The request id is
    /// echoed back in `Msg::PageFetched` so stale completions can be told
    /// apart from current ones.
    FetchPage {
        request_id: crate::RequestId,
        page: u32,
    },
}
