use thiserror::Error;

/// The closed set of routes the dispatcher understands.
///
/// Produced by [`Route::parse`]; the dispatcher matches on it exhaustively,
/// so adding a route is a compile-time-checked change rather than a new
/// string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `POST /tasks`
    CreateTask,
    /// `GET /tasks/{id}`
    GetTask { id: String },
    /// `PUT /tasks/{id}`
    UpdateTask { id: String },
    /// `DELETE /tasks/{id}`
    DeleteTask { id: String },
    /// `GET /tasks`
    ListTasks,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The template requires an id but the path segment is empty.
    #[error("path parameter 'id' is required")]
    MissingId,
    /// No method + path combination matched.
    #[error("route not found")]
    NotFound,
}

impl RouteError {
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::MissingId => 400,
            RouteError::NotFound => 404,
        }
    }
}

impl Route {
    /// Match `method` + `path` against the declared route table, extracting
    /// the `{id}` segment where the template carries one.
    pub fn parse(method: &str, path: &str) -> Result<Self, RouteError> {
        let method = method.to_ascii_uppercase();
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match (method.as_str(), segments.as_slice()) {
            ("POST", ["tasks"]) => Ok(Route::CreateTask),
            ("GET", ["tasks"]) => Ok(Route::ListTasks),
            ("GET", ["tasks", id]) => with_id(id, |id| Route::GetTask { id }),
            ("PUT", ["tasks", id]) => with_id(id, |id| Route::UpdateTask { id }),
            ("DELETE", ["tasks", id]) => with_id(id, |id| Route::DeleteTask { id }),
            _ => Err(RouteError::NotFound),
        }
    }
}

fn with_id(id: &str, make: impl FnOnce(String) -> Route) -> Result<Route, RouteError> {
    if id.is_empty() {
        return Err(RouteError::MissingId);
    }
    Ok(make(id.to_string()))
}
