pub mod activities_service;
pub mod activity_signup_service;
