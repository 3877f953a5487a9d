#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::aligner::ReadAhead;
    use crate::config::{CounterConfig, JobFile, SortOrder, default_workers};
    use crate::error::WordCountError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_job_file() {
        let job = JobFile::parse("corpus.txt\nby_name.txt\nby_count.txt\n4\n").unwrap();
        assert_eq!(
            job,
            JobFile {
                source_path: PathBuf::from("corpus.txt"),
                by_name_output: PathBuf::from("by_name.txt"),
                by_count_output: PathBuf::from("by_count.txt"),
                workers: 4,
            }
        );
    }

    #[test]
    fn test_parse_job_file_trims_lines() {
        let job = JobFile::parse("  in.txt \r\n\ta.txt\r\nn.txt  \r\n 8 ").unwrap();
        assert_eq!(job.source_path, PathBuf::from("in.txt"));
        assert_eq!(job.by_name_output, PathBuf::from("a.txt"));
        assert_eq!(job.by_count_output, PathBuf::from("n.txt"));
        assert_eq!(job.workers, 8);
    }

    #[rstest]
    #[case::empty("")]
    #[case::source_only("in.txt\n")]
    #[case::missing_workers("in.txt\na.txt\nn.txt\n")]
    #[case::blank_line("in.txt\n\nn.txt\n2\n")]
    #[case::zero_workers("in.txt\na.txt\nn.txt\n0\n")]
    #[case::negative_workers("in.txt\na.txt\nn.txt\n-3\n")]
    #[case::word_workers("in.txt\na.txt\nn.txt\nfour\n")]
    fn test_parse_job_file_rejects(#[case] text: &str) {
        let err = JobFile::parse(text).unwrap_err();
        assert!(matches!(err, WordCountError::InvalidConfiguration(_)), "{err:?}");
    }

    #[test]
    fn test_load_missing_job_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JobFile::load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, WordCountError::InvalidConfiguration(_)), "{err:?}");
    }

    #[test]
    fn test_job_file_yields_one_config_per_order() {
        let job = JobFile::parse("in.txt\na.txt\nn.txt\n3\n").unwrap();
        let [by_name, by_count] = job.configs();

        assert_eq!(by_name.order, SortOrder::ByName);
        assert_eq!(by_name.output_path, PathBuf::from("a.txt"));
        assert_eq!(by_count.order, SortOrder::ByCount);
        assert_eq!(by_count.output_path, PathBuf::from("n.txt"));
        for config in [by_name, by_count] {
            assert_eq!(config.source_path, PathBuf::from("in.txt"));
            assert_eq!(config.workers, 3);
        }
    }

    #[test]
    fn test_counter_config_defaults() {
        let config = CounterConfig::new("in.txt", "out.txt");
        assert_eq!(config.workers, default_workers());
        assert!(config.workers >= 1);
        assert_eq!(config.order, SortOrder::ByName);
        assert_eq!(config.read_ahead, ReadAhead::default());
    }
}
