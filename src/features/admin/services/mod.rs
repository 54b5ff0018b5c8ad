mod admin_actions;

pub use admin_actions::AdminActions;
