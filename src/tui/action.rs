// Actions the chat view hands back to its event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A finished line to hand to the controller.
    Submit(String),
    Quit,
}
