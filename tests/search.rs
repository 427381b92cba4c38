mod common;

use common::{acme, fixture};
use taskman::error::ErrorCode;
use taskman::search::{self, SearchRequest, SearchResults};

fn request(query: &str, threshold: u8) -> SearchRequest<'_> {
    SearchRequest {
        query,
        threshold,
        project: None,
        section: None,
    }
}

fn names(hits: &[taskman::search::SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.name.as_str()).collect()
}

fn run(req: &SearchRequest<'_>) -> SearchResults {
    search::run(&fixture(), &acme(), req).unwrap()
}

#[test]
fn finds_projects_regardless_of_word_order() {
    let results = run(&request("redesign website", 80));

    assert_eq!(
        names(&results.projects),
        vec!["Website Redesign", "Redesign Website Q3"]
    );
    assert!(results.projects.iter().all(|h| h.score >= 80));
    assert!(results.sections.is_empty());
    assert!(results.tasks.is_empty());
}

#[test]
fn zero_threshold_keeps_every_project() {
    let results = run(&request("anything at all", 0));

    assert_eq!(
        names(&results.projects),
        vec![
            "Customer Portal",
            "Website Redesign",
            "Redesign Website Q3",
            "Marketing Plan"
        ]
    );
}

#[test]
fn searches_sections_and_tasks_of_named_project() {
    let mut req = request("login bug", 80);
    req.project = Some("Customer Portal");

    let results = run(&req);

    assert!(results.projects.is_empty());
    assert!(results.sections.is_empty());
    assert_eq!(names(&results.tasks), vec!["Fix login bug"]);
    assert_eq!(results.tasks[0].gid, "t1");
    assert_eq!(results.tasks[0].score, 100);
}

#[test]
fn section_narrows_task_search() {
    let mut req = request("website", 0);
    req.project = Some("Customer Portal");
    req.section = Some("Done");

    let results = run(&req);

    assert_eq!(names(&results.sections), vec!["To Do", "In Progress", "Done"]);
    assert_eq!(names(&results.tasks), vec!["Update website footer"]);
}

#[test]
fn section_without_project_is_rejected() {
    let mut req = request("website", 80);
    req.section = Some("Done");

    let err = search::run(&fixture(), &acme(), &req).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
}

#[test]
fn unknown_project_is_not_found() {
    let mut req = request("website", 80);
    req.project = Some("Website");

    let err = search::run(&fixture(), &acme(), &req).unwrap_err();

    assert_eq!(err.code, ErrorCode::ProjectNotFound);
}

#[test]
fn unknown_section_is_not_found() {
    let mut req = request("website", 80);
    req.project = Some("Customer Portal");
    req.section = Some("Archive");

    let err = search::run(&fixture(), &acme(), &req).unwrap_err();

    assert_eq!(err.code, ErrorCode::SectionNotFound);
}

#[test]
fn threshold_above_hundred_is_rejected() {
    let err = search::run(&fixture(), &acme(), &request("website", 101)).unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
}

#[test]
fn results_serialize_in_camel_case() {
    let results = run(&request("marketing", 80));
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["query"], "marketing");
    assert_eq!(json["threshold"], 80);
    assert_eq!(json["projects"][0]["name"], "Marketing Plan");
    assert_eq!(json["projects"][0]["gid"], "p4");
}
