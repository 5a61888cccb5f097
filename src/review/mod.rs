pub mod output;
pub mod pager;
