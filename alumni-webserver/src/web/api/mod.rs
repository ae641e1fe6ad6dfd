use std::{fmt::Display, result};

use alumni_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, status, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite, Cfg},
};
use alumni_application::prelude as flows;

mod comments;
mod error;
mod events;
mod forums;
mod gallery;
mod jobs;
mod members;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        users::post_register,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   users   --- //
        users::get_user,
        users::put_user,
        users::put_user_avatar,
        users::put_user_password,
        users::get_admin,
        users::put_admin,
        // ---   members   --- //
        members::get_alumni,
        members::get_alumnus,
        members::approve_alumnus,
        members::reject_alumnus,
        members::delete_alumnus,
        members::get_students,
        members::get_student,
        members::approve_student,
        members::reject_student,
        members::delete_student,
        members::get_counts,
        // ---   forum   --- //
        forums::get_topics,
        forums::get_topic,
        forums::get_topics_of_user,
        forums::post_topic,
        forums::put_topic,
        forums::put_topic_status,
        forums::delete_topic,
        // ---   comments   --- //
        comments::get_comment_tree,
        comments::post_topic_comments,
        comments::get_comments_of_user,
        comments::post_comment,
        comments::post_reply,
        comments::put_comment,
        comments::post_like,
        comments::delete_comment,
        // ---   events   --- //
        events::get_events,
        events::post_event,
        events::delete_event,
        events::post_join,
        events::get_joined_events,
        events::delete_leave,
        events::get_attendees,
        // ---   jobs   --- //
        jobs::get_jobs,
        jobs::get_jobs_of_user,
        jobs::post_job,
        jobs::put_job,
        jobs::delete_job,
        // ---   gallery   --- //
        gallery::get_gallery,
        gallery::get_gallery_of_user,
        gallery::post_gallery_item,
        gallery::put_gallery_item,
        gallery::delete_gallery_item,
        // ---   misc   --- //
        util::get_check,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
