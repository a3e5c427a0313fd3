pub mod get_scratchpad;
pub mod update_scratchpad;
