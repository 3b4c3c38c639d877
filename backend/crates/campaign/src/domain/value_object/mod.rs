//! Value Object Module

pub mod ad_text;
pub mod budget;
pub mod campaign_status;
pub mod campaign_title;
