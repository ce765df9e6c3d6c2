#![allow(dead_code)]

pub mod definition_assertions;
pub mod source_fixtures;
