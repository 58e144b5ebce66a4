// One thin wrapper per backend endpoint; all calls go through the
// request pipeline in services::request.

pub mod auth;
pub mod dashboard;
pub mod dict;
pub mod leads;
pub mod notifications;
pub mod pool;
pub mod reports;
pub mod settings;
