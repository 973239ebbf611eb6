//! Organization member module

mod api;
mod commands;
mod models;

pub use commands::run_user_command;
pub use models::{
    Feature, MembersResponse, OrganizationMember, OrganizationMembership, Provider, User,
    UserExternal, UserResponse,
};
