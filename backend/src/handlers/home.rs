//! Landing page listing the available routes

use axum::response::Html;

const HOME_PAGE: &str = concat!(
    "<h1>Welcome to the Climate Observation API</h1><br>",
    "Routes Available (also served under /api/v1.0):<br><br>",
    "* Last year's precipitation data:",
    "<br>/precipitation",
    "<br><br>* List of all stations:",
    "<br>/stations",
    "<br><br>* Dates and temperature observations for the last year of data:",
    "<br>/tobs",
    "<br><br>* Needs start date in format YYYY-MM-DD. Returns the min, avg, max temperature per date from the start date:",
    "<br>/&lt;start&gt;",
    "<br><br>* Needs start and end date in format YYYY-MM-DD. Returns the min, avg, max temperature per date between both dates:",
    "<br>/&lt;start&gt;/&lt;end&gt;",
    "<br><br>* Optional start and end query parameters in format YYYY-MM-DD:",
    "<br>/search_type?start=&lt;start&gt;&amp;end=&lt;end&gt;",
);

/// Home page handler
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
