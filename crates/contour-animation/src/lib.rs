//! Animation system for Contour
//!
//! Provides linear tweens and critically damped springs.
//! There is no implicit frame clock: the owner of an [`Animatable`] steps it
//! with [`Animatable::advance`] once per frame.
//!
//! Note: This crate uses camelCase for `animateTo`/`snapTo` to keep the names
//! recognisable next to their Jetpack Compose counterparts.

#![allow(non_snake_case)]

mod animation;

pub use animation::*;
