use crate::models::Movie;

use super::utils::format_running_time;

/// Display strings for one movie. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieView {
    pub original_title: String,
    pub title: String,
    pub release_date: String,
    pub director: String,
    pub running_time: String,
    pub rt_score: String,
    pub description: String,
    pub banner: String,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        MovieView {
            original_title: text(&movie.original_title),
            title: text(&movie.title),
            release_date: text(&movie.release_date),
            director: text(&movie.director),
            running_time: movie
                .running_time
                .map(format_running_time)
                .unwrap_or_default(),
            rt_score: text(&movie.rt_score),
            description: text(&movie.description),
            banner: text(&movie.movie_banner),
        }
    }
}
