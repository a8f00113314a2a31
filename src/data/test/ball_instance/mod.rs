use crate::data::ball_instance::BallInstanceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_server;
mod get_recent_by_server;
