//! Tests for branch discovery.

use super::*;
use async_trait::async_trait;
use gitlab_client::Error as ClientError;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// What the mock provider answers to `list_branches`.
enum MockBehavior {
    Branches(Vec<Branch>),
    AuthError,
    NotFound,
    Status(u16),
    Transport,
    MalformedBody,
}

/// In-memory provider that counts requests and records the project asked for.
struct MockProjectClient {
    behavior: MockBehavior,
    list_calls: AtomicUsize,
    requested: Mutex<Vec<ProjectId>>,
}

impl MockProjectClient {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            list_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn with_branches(branches: Vec<Branch>) -> Self {
        Self::new(MockBehavior::Branches(branches))
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectClient for MockProjectClient {
    async fn get_project(&self, project_id: &ProjectId) -> Result<Project, ClientError> {
        match &self.behavior {
            MockBehavior::NotFound => Err(ClientError::NotFound),
            _ => Ok(Project {
                id: 42,
                name: "project".to_string(),
                path_with_namespace: project_id.to_string(),
                default_branch: Some("develop".to_string()),
                web_url: "https://gitlab.example.com/group/project".to_string(),
            }),
        }
    }

    async fn list_branches(&self, project_id: &ProjectId) -> Result<Vec<Branch>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(project_id.clone());

        match &self.behavior {
            MockBehavior::Branches(branches) => Ok(branches.clone()),
            MockBehavior::AuthError => Err(ClientError::AuthError("401 Unauthorized".to_string())),
            MockBehavior::NotFound => Err(ClientError::NotFound),
            MockBehavior::Status(code) => Err(ClientError::UnexpectedStatus(*code)),
            MockBehavior::Transport => {
                Err(ClientError::Transport("connection reset by peer".to_string()))
            }
            MockBehavior::MalformedBody => Err(ClientError::Deserialization(
                serde_json::from_str::<Vec<Branch>>("{\"name\": 1}").unwrap_err(),
            )),
        }
    }
}

fn project_id() -> ProjectId {
    ProjectId::Numeric(42)
}

// --- filter_protected_branches ---

#[test]
fn test_filter_scenario_main_release_feature() {
    let branches = vec![
        Branch::new("main", true),
        Branch::new("release-1.0", true),
        Branch::new("feature-x", false),
    ];

    assert_eq!(filter_protected_branches(branches), vec!["release-1.0"]);
}

#[test]
fn test_filter_empty_list() {
    assert!(filter_protected_branches(Vec::new()).is_empty());
}

#[test]
fn test_filter_all_protected_without_main_returns_everything() {
    let branches = vec![
        Branch::new("develop", true),
        Branch::new("release-2.0", true),
        Branch::new("hotfix", true),
    ];

    assert_eq!(
        filter_protected_branches(branches),
        vec!["develop", "release-2.0", "hotfix"]
    );
}

#[test]
fn test_filter_only_main_protected_returns_nothing() {
    let branches = vec![
        Branch::new("main", true),
        Branch::new("feature-a", false),
        Branch::new("feature-b", false),
    ];

    assert!(filter_protected_branches(branches).is_empty());
}

#[test]
fn test_filter_preserves_response_order() {
    let branches = vec![
        Branch::new("zeta", true),
        Branch::new("alpha", true),
        Branch::new("main", true),
        Branch::new("mid", true),
    ];

    assert_eq!(filter_protected_branches(branches), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_filter_passes_duplicates_through() {
    let branches = vec![
        Branch::new("release", true),
        Branch::new("release", true),
    ];

    assert_eq!(filter_protected_branches(branches), vec!["release", "release"]);
}

#[test]
fn test_filter_excludes_only_exact_main() {
    let branches = vec![
        Branch::new("Main", true),
        Branch::new("main-backup", true),
        Branch::new("master", true),
        Branch::new("main", true),
    ];

    assert_eq!(
        filter_protected_branches(branches),
        vec!["Main", "main-backup", "master"]
    );
}

#[test]
fn test_filter_unprotected_main_is_also_excluded() {
    let branches = vec![Branch::new("main", false), Branch::new("stable", true)];

    assert_eq!(filter_protected_branches(branches), vec!["stable"]);
}

#[test]
fn test_filter_matches_set_definition_for_mixed_input() {
    let branches: Vec<Branch> = (0..20)
        .map(|i| {
            let name = if i % 7 == 0 {
                "main".to_string()
            } else {
                format!("branch-{i}")
            };
            Branch {
                name,
                protected: i % 3 != 0,
            }
        })
        .collect();

    let expected: Vec<String> = branches
        .iter()
        .filter(|b| b.protected && b.name != "main")
        .map(|b| b.name.clone())
        .collect();

    assert_eq!(filter_protected_branches(branches), expected);
}

// --- list_protected_branches ---

#[tokio::test]
async fn test_list_protected_branches_makes_exactly_one_request() {
    let client = MockProjectClient::with_branches(vec![
        Branch::new("main", true),
        Branch::new("release-1.0", true),
        Branch::new("feature-x", false),
    ]);

    let result = list_protected_branches(&client, &project_id()).await;

    assert_eq!(result.unwrap(), vec!["release-1.0"]);
    assert_eq!(client.list_calls(), 1);
    assert_eq!(*client.requested.lock().unwrap(), vec![project_id()]);
}

#[tokio::test]
async fn test_list_protected_branches_is_idempotent_and_not_cached() {
    let client = MockProjectClient::with_branches(vec![
        Branch::new("develop", true),
        Branch::new("main", true),
    ]);

    let first = list_protected_branches(&client, &project_id()).await.unwrap();
    let second = list_protected_branches(&client, &project_id()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(client.list_calls(), 2);
}

#[tokio::test]
async fn test_list_protected_branches_authentication_error() {
    let client = MockProjectClient::new(MockBehavior::AuthError);

    let result = list_protected_branches(&client, &project_id()).await;

    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_list_protected_branches_not_found() {
    let client = MockProjectClient::new(MockBehavior::NotFound);

    let result = list_protected_branches(&client, &project_id()).await;

    match result {
        Err(Error::NotFound { project }) => assert_eq!(project, "42"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert_eq!(client.list_calls(), 1);
}

#[tokio::test]
async fn test_list_protected_branches_server_error_is_transport() {
    let client = MockProjectClient::new(MockBehavior::Status(500));

    let result = list_protected_branches(&client, &project_id()).await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert_eq!(client.list_calls(), 1, "failures must not be retried");
}

#[tokio::test]
async fn test_list_protected_branches_network_failure_is_transport() {
    let client = MockProjectClient::new(MockBehavior::Transport);

    let result = list_protected_branches(&client, &project_id()).await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_list_protected_branches_malformed_body() {
    let client = MockProjectClient::new(MockBehavior::MalformedBody);

    let result = list_protected_branches(&client, &project_id()).await;

    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn test_list_protected_branches_through_trait_object() {
    let client: Box<dyn ProjectClient> = Box::new(MockProjectClient::with_branches(vec![
        Branch::new("release", true),
    ]));

    let result = list_protected_branches(client.as_ref(), &project_id()).await;

    assert_eq!(result.unwrap(), vec!["release"]);
}

// --- describe_project / BranchDiscoverer ---

#[tokio::test]
async fn test_describe_project_success() {
    let client = MockProjectClient::with_branches(Vec::new());
    let id = ProjectId::Path("group/project".to_string());

    let project = describe_project(&client, &id).await.unwrap();

    assert_eq!(project.path_with_namespace, "group/project");
    assert_eq!(client.list_calls(), 0);
}

#[tokio::test]
async fn test_describe_project_not_found() {
    let client = MockProjectClient::new(MockBehavior::NotFound);

    let result = describe_project(&client, &project_id()).await;

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_branch_discoverer_delegates_to_client() {
    let discoverer = BranchDiscoverer::new(MockProjectClient::with_branches(vec![
        Branch::new("main", true),
        Branch::new("release-1.0", true),
    ]));

    let names = discoverer.list_protected_branches(&project_id()).await.unwrap();
    let project = discoverer.describe_project(&project_id()).await.unwrap();

    assert_eq!(names, vec!["release-1.0"]);
    assert_eq!(project.id, 42);
    assert_eq!(discoverer.into_inner().list_calls(), 1);
}
