//! Tests for run progress tracking

#[cfg(test)]
mod tests {
    use framefill::io::progress::ProgressManager;

    // Tests hidden progress accepts updates up to the expected total
    // Verified by constructing the hidden bar without a length
    #[test]
    fn test_hidden_progress_tracks_tiles() {
        let progress = ProgressManager::hidden(25);

        progress.update(10);
        progress.update(25);
        progress.finish();
    }

    // Tests a labeled bar survives updates past its expected total
    #[test]
    fn test_visible_progress_overshoot() {
        let progress = ProgressManager::new("image.png", 12);
        progress.update(3);
        progress.update(13);
        progress.finish();
    }
}
