//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use pixelsprite::io::progress::ProgressManager;
    use std::thread;

    // Tests hidden bars still count
    // Verified by skipping set_length for hidden bars
    #[test]
    fn test_hidden_progress_counts() {
        let progress = ProgressManager::hidden(3);

        progress.advance();
        progress.advance();

        assert_eq!(progress.position(), 2);
        assert_eq!(progress.length(), Some(3));
        progress.finish("done");
    }

    // Tests visible bars track length and position
    // Verified by creating the bar with length zero
    #[test]
    fn test_visible_progress_counts() {
        let progress = ProgressManager::new(4);

        progress.advance();

        assert_eq!(progress.position(), 1);
        assert_eq!(progress.length(), Some(4));
        progress.finish("done");
    }

    // Tests advancing from several threads
    // Verified by advancing a per-thread copy
    #[test]
    fn test_advance_from_threads() {
        let progress = ProgressManager::hidden(32);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..8 {
                        progress.advance();
                    }
                });
            }
        });

        assert_eq!(progress.position(), 32);
    }
}
