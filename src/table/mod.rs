//! The shared respondent-visit table: its key, its item columns and their raw values.

pub mod key;
pub mod response;
pub mod select;

pub use key::{
    KEY_COLUMNS, Respondent, RespondentVisitKey, describe_row, ensure_unique_keys,
    read_respondents,
};
pub use response::{RawResponse, read_responses};
pub use select::{ItemSelector, item_column, select_items};
