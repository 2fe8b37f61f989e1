//! Tests for the interactive menu loop, driven by scripted input.

use std::io::Cursor;

use crate::cli::app::ProjectsApp;
use crate::db::{Database, Hours, Project, ProjectRepository, SqliteDatabase};
use crate::service::ProjectService;

type TestApp = ProjectsApp<SqliteDatabase, Cursor<Vec<u8>>, Vec<u8>>;

async fn setup_service() -> ProjectService<SqliteDatabase> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    ProjectService::new(db)
}

async fn seed(service: &ProjectService<SqliteDatabase>, name: &str) -> Project {
    let project = Project {
        id: None,
        name: name.to_string(),
        estimated_hours: Some(Hours::from_hundredths(1000)),
        actual_hours: None,
        difficulty: Some(3),
        notes: None,
    };
    service.add_project(&project).await.expect("Seed should succeed")
}

async fn run_script(service: ProjectService<SqliteDatabase>, script: &str) -> TestApp {
    let mut app = ProjectsApp::new(service, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    app.run().await.expect("Menu loop should end cleanly");
    app
}

fn output(app: TestApp) -> String {
    String::from_utf8(app.into_output()).expect("Output should be UTF-8")
}

async fn stored_projects(app: &TestApp) -> Vec<Project> {
    app.service()
        .db()
        .projects()
        .fetch_all()
        .await
        .expect("List should succeed")
}

#[tokio::test]
async fn blank_selection_exits() {
    let app = run_script(setup_service().await, "\n").await;
    let out = output(app);
    assert!(out.contains("Press the Enter key to quit:"));
    assert!(out.contains("  1) Add a project"));
    assert!(out.contains("  5) Delete a project"));
    assert!(out.contains("You are not working with a project."));
    assert!(out.contains("Enter a menu selection: "));
    assert!(out.ends_with("Exiting the menu. Good Bye!\n"));
}

#[tokio::test]
async fn end_of_input_exits() {
    let app = run_script(setup_service().await, "").await;
    assert!(output(app).contains("Exiting the menu. Good Bye!"));
}

#[tokio::test]
async fn menu_is_reprinted_before_every_selection() {
    let app = run_script(setup_service().await, "2\n2\n\n").await;
    let out = output(app);
    assert_eq!(out.matches("These are the available selections.").count(), 3);
}

#[tokio::test]
async fn unknown_number_is_not_a_valid_selection() {
    let app = run_script(setup_service().await, "9\n\n").await;
    assert!(output(app).contains("9 is not a valid selection."));
}

#[tokio::test]
async fn non_numeric_selection_is_reported_and_loop_continues() {
    let app = run_script(setup_service().await, "abc\n\n").await;
    let out = output(app);
    assert!(out.contains("ERROR: abc is not a valid number. TRY AGAIN!"));
    assert!(out.contains("Exiting the menu. Good Bye!"));
}

#[tokio::test]
async fn create_stores_all_fields_with_blank_as_unset() {
    let app = run_script(setup_service().await, "1\nBuild API\n10\n\n3\n\n\n").await;

    assert!(app.current_project().is_none());
    let projects = stored_projects(&app).await;
    assert_eq!(
        projects,
        vec![Project {
            id: Some(1),
            name: "Build API".to_string(),
            estimated_hours: Some(Hours::from_hundredths(1000)),
            actual_hours: None,
            difficulty: Some(3),
            notes: None,
        }]
    );

    let out = output(app);
    assert!(out.contains("Enter the project name: "));
    assert!(out.contains("Enter the project difficulty (1-5): "));
    assert!(out.contains("You have successfully created project:"));
    assert!(out.contains("10.00"));
}

#[tokio::test]
async fn create_with_bad_decimal_stores_nothing() {
    let app = run_script(setup_service().await, "1\nDeck\n1.234\n\n").await;

    assert!(stored_projects(&app).await.is_empty());
    assert!(output(app).contains("ERROR: 1.234 is not a valid decimal number. TRY AGAIN!"));
}

#[tokio::test]
async fn create_with_oversized_hours_stores_nothing() {
    let app = run_script(setup_service().await, "1\nDeck\n100000\n\n").await;

    assert!(stored_projects(&app).await.is_empty());
    assert!(output(app).contains("ERROR: 100000 is not a valid decimal number. TRY AGAIN!"));
}

#[tokio::test]
async fn create_with_bad_difficulty_stores_nothing() {
    let app = run_script(setup_service().await, "1\nDeck\n\n\nhard\n\n").await;

    assert!(stored_projects(&app).await.is_empty());
    assert!(output(app).contains("ERROR: hard is not a valid number. TRY AGAIN!"));
}

#[tokio::test]
async fn list_prints_id_and_name_in_order() {
    let service = setup_service().await;
    seed(&service, "Build API").await;
    seed(&service, "Paint fence").await;

    let app = run_script(service, "2\n\n").await;
    assert!(app.current_project().is_none());
    let out = output(app);
    let listing = out.find("Projects:\n  1: Build API\n  2: Paint fence\n");
    assert!(listing.is_some(), "unexpected listing:\n{}", out);
}

#[tokio::test]
async fn select_sets_current_project() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n\n").await;
    let current = app.current_project().expect("Project should be selected");
    assert_eq!(current.id, Some(1));
    assert_eq!(current.name, "Build API");
    assert!(output(app).contains("You are working with project:"));
}

#[tokio::test]
async fn select_missing_id_clears_current_project() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n3\n999\n\n").await;
    assert!(app.current_project().is_none());
    assert!(output(app).contains("ERROR: Project with ID = 999 does not exist. TRY AGAIN!"));
}

#[tokio::test]
async fn select_with_bad_id_keeps_current_project() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n3\none\n\n").await;
    assert_eq!(app.current_project().and_then(|p| p.id), Some(1));
}

#[tokio::test]
async fn update_without_selection_asks_for_one() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "4\n\n").await;
    assert!(output(app).contains("Please select a project."));
}

#[tokio::test]
async fn update_keeps_blank_fields_and_replaces_the_rest() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n4\n\n\n4.25\n\nSome notes\n\n").await;

    let expected = Project {
        id: Some(1),
        name: "Build API".to_string(),
        estimated_hours: Some(Hours::from_hundredths(1000)),
        actual_hours: Some(Hours::from_hundredths(425)),
        difficulty: Some(3),
        notes: Some("Some notes".to_string()),
    };
    assert_eq!(app.current_project(), Some(&expected));
    assert_eq!(stored_projects(&app).await, vec![expected]);

    let out = output(app);
    assert!(out.contains("Enter the project name [Build API]: "));
    assert!(out.contains("Enter the estimated hours [10.00]: "));
    assert!(out.contains("Enter the actual hours [-]: "));
    assert!(out.contains("Enter the project difficulty (1-5) [3]: "));
}

#[tokio::test]
async fn update_with_bad_input_changes_nothing() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n4\nRenamed\nlots\n\n").await;

    assert_eq!(stored_projects(&app).await[0].name, "Build API");
    assert_eq!(
        app.current_project().map(|p| p.name.as_str()),
        Some("Build API")
    );
}

#[tokio::test]
async fn delete_selected_project_clears_selection() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "3\n1\n5\n1\n\n").await;
    assert!(app.current_project().is_none());
    assert!(app.service().db().projects().fetch_by_id(1).await.unwrap().is_none());
    let out = output(app);
    assert!(out.contains("Project 1 was deleted successfully."));
    assert!(out.ends_with("You are not working with a project.\nEnter a menu selection: \nExiting the menu. Good Bye!\n"));
}

#[tokio::test]
async fn delete_other_project_keeps_selection() {
    let service = setup_service().await;
    seed(&service, "Build API").await;
    seed(&service, "Paint fence").await;

    let app = run_script(service, "3\n1\n5\n2\n\n").await;
    assert_eq!(app.current_project().and_then(|p| p.id), Some(1));
    assert_eq!(stored_projects(&app).await.len(), 1);
}

#[tokio::test]
async fn delete_missing_project_is_reported() {
    let app = run_script(setup_service().await, "5\n42\n\n").await;
    assert!(output(app).contains("ERROR: Project with ID = 42 does not exist. TRY AGAIN!"));
}

#[tokio::test]
async fn delete_with_blank_id_does_nothing() {
    let service = setup_service().await;
    seed(&service, "Build API").await;

    let app = run_script(service, "5\n\n\n").await;
    assert_eq!(stored_projects(&app).await.len(), 1);
}
