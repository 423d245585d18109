// Integration tests for the launch dashboard data flow
//
// This test suite validates the complete workflow:
// 1. Load a launch table from a CSV file
// 2. Drive a dashboard session through selection changes
// 3. Check pie, label and scatter outputs against the raw table
// 4. Export the filtered launches

use std::{io::Write, sync::Arc};

use launchdash::{
    DashboardSession, Dataset, LaunchDashError, PayloadRange, SelectionChange, SiteSelector,
    engine::{filter_scatter, payload_range_label, success_pie},
    export::write_points,
};
use tempfile::NamedTempFile;

const LAUNCHES: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0
4,5,CCAFS LC-40,0,677.0,F9 v1.0  B0007,v1.0
5,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
6,7,CCAFS LC-40,1,3170.0,F9 v1.1,v1.1
7,8,CCAFS LC-40,0,3325.0,F9 v1.1,v1.1
8,9,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
9,10,KSC LC-39A,1,5600.0,F9 FT B1030,FT
10,11,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
11,12,CCAFS SLC-40,1,6070.0,F9 B4 B1040.1,B4
12,13,KSC LC-39A,0,5300.0,F9 FT B1032.1,FT
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

fn load() -> Arc<Dataset> {
    let file = write_csv(LAUNCHES);
    Arc::new(Dataset::from_csv_path(file.path()).unwrap())
}

#[test]
fn test_two_record_example() {
    let file = write_csv(
        "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
         CCAFS,500,1,v1.0\n\
         KSC,9000,0,v1.1\n",
    );
    let dataset = Dataset::from_csv_path(file.path()).unwrap();

    let all = success_pie(&dataset, &SiteSelector::All);
    assert_eq!(all.iter().collect::<Vec<_>>(), vec![("CCAFS", 1)]);

    let ksc = success_pie(&dataset, &SiteSelector::from("KSC"));
    assert_eq!(ksc.iter().collect::<Vec<_>>(), vec![("Failure", 1)]);

    let scatter = filter_scatter(
        &dataset,
        &SiteSelector::All,
        &PayloadRange::new(0., 1000.).unwrap(),
    );
    assert_eq!(scatter.points().len(), 1);
    assert_eq!(scatter.points()[0].record, dataset.records()[0]);

    assert_eq!(
        payload_range_label(0., 9600.),
        "Selected payload range: 0 kg — 9600 kg"
    );
}

#[test]
fn test_pie_totals_match_table() {
    let dataset = load();

    let all = success_pie(&dataset, &SiteSelector::All);
    assert_eq!(all.total(), dataset.success_count());
    assert_eq!(all.get("KSC LC-39A"), Some(2));
    assert_eq!(all.get("CCAFS LC-40"), Some(1));

    for site in dataset.launch_sites() {
        let pie = success_pie(&dataset, &SiteSelector::from(site));
        let site_records = dataset.iter().filter(|r| r.launch_site == site).count();
        assert_eq!(pie.total(), site_records, "site {}", site);
    }
}

#[test]
fn test_session_walkthrough() {
    let dataset = load();
    let mut session = DashboardSession::with_defaults(dataset.clone());

    assert_eq!(
        session.payload_label(),
        "Selected payload range: 0 kg — 9600 kg"
    );
    assert_eq!(session.scatter().points().len(), dataset.len());

    session.apply(SelectionChange::Site(SiteSelector::from("CCAFS LC-40")));
    assert_eq!(session.pie().get("Failure"), Some(6));
    assert_eq!(session.pie().get("Success"), Some(1));
    assert_eq!(session.pie().slices[0].label, "Failure");
    assert_eq!(session.scatter().points().len(), 7);

    session.apply(SelectionChange::PayloadRange(
        PayloadRange::new(3000., 4000.).unwrap(),
    ));
    let sites_and_payloads = session
        .scatter()
        .points()
        .iter()
        .map(|p| (p.record.flight_number, p.x()))
        .collect::<Vec<_>>();
    assert_eq!(
        sites_and_payloads,
        vec![(Some(7), 3170.), (Some(8), 3325.)]
    );

    session.apply(SelectionChange::Site(SiteSelector::from("KSC LC-39A")));
    assert!(session.scatter().is_no_data());
    assert_eq!(
        session.scatter().annotation(),
        Some("No records match filters")
    );
}

#[test]
fn test_export_filtered_launches() {
    let dataset = load();
    let scatter = filter_scatter(
        &dataset,
        &SiteSelector::from("VAFB SLC-4E"),
        &PayloadRange::new(0., 10000.).unwrap(),
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("vafb.jsonl");

    write_points(&output, &scatter).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["Flight Number"], 6);
    assert_eq!(first["Outcome"], "Failure");
}

#[test]
fn test_missing_columns_fail_load() {
    let file = write_csv("Launch Site,class\nKSC LC-39A,1\n");
    match Dataset::from_csv_path(file.path()) {
        Err(LaunchDashError::MissingColumns { missing, found }) => {
            assert_eq!(missing, vec!["Payload Mass (kg)", "Booster Version Category"]);
            assert_eq!(found, vec!["Launch Site", "class"]);
        }
        other => panic!("Expected MissingColumns error, got {:?}", other),
    }
}
