//! Common reusable UI components
//!
//! This module provides commonly used UI components that are shared across
//! multiple parts of the application.

pub mod button;
pub mod dropdown;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dropdown::{Dropdown, DropdownItem};
