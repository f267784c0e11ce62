#[derive(Debug, Clone)]
pub enum Error {
    ApiError(String),
    /* 403 from the station API, which rejects requests without browser headers */
    Rejected(String),
    InvalidResponse(String, String),
    NotifyError(String),
    InternalError,
}
