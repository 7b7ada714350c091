use crate::app::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScanProps {
    /// Called with the result page once an analysis succeeds, or with the
    /// home page when the user backs out.
    pub on_navigate: Callback<Page>,
}
