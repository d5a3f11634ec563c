pub async fn index() -> &'static str {
    "Cinema Hub API"
}
