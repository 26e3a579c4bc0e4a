//! `occurkit_web` v1:
//! Occurrence-report form served over HTTP.
//!
//! - `conf`    : routes, env keys, notice texts, form fields
//! - `spec`    : options, actions, notices, outcomes
//! - `gateway` : submission handling (store / render / reject)
//! - `view`    : HTML form page
//! - `routes`  : axum router
pub mod conf;
pub mod gateway;
pub mod routes;
pub mod spec;
pub mod view;

pub use gateway::{FormGateway, prepare_record};
pub use routes::build_router;
pub use spec::{
    EnumGatewayOutcome, EnumNoticeLevel, EnumSubmitAction, EnumSubmitReply, SpecGatewayOptions,
    SpecNotice,
};
