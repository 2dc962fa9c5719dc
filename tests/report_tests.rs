use anyhow::Result;
use podsize::domain::{CollectError, CollectErrorKind};
use podsize::test_support::{MockFailure, MockRuntime};
use podsize::{ContainerRecord, OutputMode, ReportConfig, ReportService, SizeInfo, SortKey};
use std::sync::Arc;

fn fleet() -> Vec<ContainerRecord> {
    vec![
        ContainerRecord::new("a1", &["web"], "nginx:1.27", SizeInfo::new(200, 100))
            .with_status("Up 3 hours"),
        ContainerRecord::new("b2", &["api"], "node:22", SizeInfo::new(50, 50))
            .with_status("Up 1 minute"),
        ContainerRecord::new("c3", &[], "busybox", SizeInfo::new(150, 50))
            .with_status("Exited (0) 2 days ago"),
    ]
}

fn run(mock: MockRuntime, config: &ReportConfig) -> Result<String> {
    let service = ReportService::new(Arc::new(mock));
    let mut out = Vec::new();
    service.run(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn row_names(report: &str) -> Vec<String> {
    report
        .lines()
        .skip(2)
        .take_while(|l| !l.is_empty())
        .map(|l| l.split_whitespace().next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_running_only_by_default() -> Result<()> {
    let report = run(MockRuntime::with_containers(fleet()), &ReportConfig::default())?;
    assert_eq!(row_names(&report), vec!["api", "web"]);
    Ok(())
}

#[test]
fn test_include_all_sorted_by_total_size() -> Result<()> {
    let config = ReportConfig {
        include_all: true,
        sort_key: SortKey::TotalSize,
        output: OutputMode::Table,
    };
    let report = run(MockRuntime::with_containers(fleet()), &config)?;
    assert_eq!(row_names(&report), vec!["web", "<unnamed>", "api"]);
    Ok(())
}

#[test]
fn test_aggregate_block_is_independent_of_order() -> Result<()> {
    let mut tails = Vec::new();
    for sort_key in [SortKey::Name, SortKey::TotalSize, SortKey::RwSize] {
        let config = ReportConfig {
            include_all: true,
            sort_key,
            output: OutputMode::Table,
        };
        let report = run(MockRuntime::with_containers(fleet()), &config)?;
        let tail: Vec<String> = report.lines().rev().take(3).map(String::from).collect();
        tails.push(tail);
    }

    assert!(tails.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        tails[0],
        vec!["Combined:   600 B", "Root FS:    400 B", "Read/Write: 200 B"]
    );
    Ok(())
}

#[test]
fn test_json_mode_matches_in_memory_order() -> Result<()> {
    let config = ReportConfig {
        include_all: true,
        sort_key: SortKey::RwSize,
        output: OutputMode::Json,
    };
    let report = run(MockRuntime::with_containers(fleet()), &config)?;

    let decoded: Vec<ContainerRecord> = serde_json::from_str(&report)?;
    let ids: Vec<&str> = decoded.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "b2", "c3"]);
    assert_eq!(decoded[0], fleet()[0]);
    assert!(!report.contains("TOTAL"));
    Ok(())
}

#[test]
fn test_empty_listing_prints_notice_only() -> Result<()> {
    for output in [OutputMode::Table, OutputMode::Json] {
        for sort_key in [SortKey::Name, SortKey::TotalSize, SortKey::RwSize] {
            let config = ReportConfig {
                include_all: false,
                sort_key,
                output,
            };
            let report = run(MockRuntime::new(), &config)?;
            assert_eq!(report, "No containers found.\n");
        }
    }
    Ok(())
}

#[test]
fn test_failures_write_nothing() {
    for (failure, kind) in [
        (MockFailure::Subprocess, CollectErrorKind::SubprocessFailure),
        (MockFailure::Decode, CollectErrorKind::DecodeFailure),
    ] {
        let mock = MockRuntime::with_containers(fleet());
        mock.set_fail_with(failure);
        let service = ReportService::new(Arc::new(mock));

        let mut out = Vec::new();
        let err = service
            .run(&ReportConfig::default(), &mut out)
            .unwrap_err();

        assert!(out.is_empty());
        let collect_err = err.downcast_ref::<CollectError>().unwrap();
        assert_eq!(collect_err.kind(), kind);
    }
}
