/// Origin of the API server. Release builds are served by the backend itself,
/// so requests stay same-origin. Debug builds talk to a locally running
/// backend; set `BACKEND_URL` at build time when it is not on its default bind.
pub fn get_backend_url() -> &'static str {
    if cfg!(debug_assertions) {
        option_env!("BACKEND_URL").unwrap_or("http://127.0.0.1:3000")
    } else {
        ""
    }
}
