use super::MovieRecord;

pub fn find_by_id(catalog: &[MovieRecord], movie_id: i64) -> Option<&MovieRecord> {
    catalog.iter().find(|movie| movie.movie_id == movie_id)
}
