//! Integration tests for `DieselEmployeeRepository` against embedded PostgreSQL.
//!
//! Each test boots its own cluster, recreates the database and applies the
//! embedded migrations through `run_pending_migrations`, so the schema under
//! test is the one the service ships with.

use backend::domain::ports::EmployeeRepository;
use backend::domain::{Employee, EmployeeDraft, EmployeeId};
use backend::outbound::persistence::{
    DbPool, DieselEmployeeRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::pg_embed::test_cluster;
use support::{handle_cluster_setup_failure, reset_database};

const TEST_DB: &str = "diesel_employee_repo_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    repository: DieselEmployeeRepository,
}

impl TestContext {
    fn save(&self, draft: EmployeeDraft) -> Employee {
        self.runtime
            .block_on(self.repository.save(&draft))
            .expect("save employee")
    }

    fn find_by_id(&self, id: i64) -> Option<Employee> {
        self.runtime
            .block_on(self.repository.find_by_id(EmployeeId::new(id)))
            .expect("find employee")
    }

    fn find_all(&self) -> Vec<Employee> {
        self.runtime
            .block_on(self.repository.find_all())
            .expect("list employees")
    }

    fn delete_by_id(&self, id: i64) {
        self.runtime
            .block_on(self.repository.delete_by_id(EmployeeId::new(id)))
            .expect("delete employee");
    }
}

fn explicit(id: i64, name: &str) -> EmployeeDraft {
    EmployeeDraft::with_id(EmployeeId::new(id), name)
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);

    runtime
        .block_on(run_pending_migrations(&database_url))
        .map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(&database_url).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        repository: DieselEmployeeRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn save_without_id_assigns_sequential_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: save_without_id_assigns_sequential_ids skipped");
        return;
    };

    let first = context.save(EmployeeDraft::new("Ada"));
    let second = context.save(EmployeeDraft::new("Grace"));

    assert_eq!(first, Employee::new(EmployeeId::new(1), "Ada"));
    assert_eq!(second, Employee::new(EmployeeId::new(2), "Grace"));
    assert_eq!(context.find_by_id(2), Some(second));
}

#[rstest]
fn save_with_existing_id_overwrites_row(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: save_with_existing_id_overwrites_row skipped");
        return;
    };

    context.save(explicit(1, "A"));
    let replaced = context.save(explicit(1, "B"));

    assert_eq!(replaced, Employee::new(EmployeeId::new(1), "B"));
    assert_eq!(context.find_all(), vec![replaced]);
}

#[rstest]
fn generated_ids_continue_past_explicit_ones(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: generated_ids_continue_past_explicit_ones skipped");
        return;
    };

    context.save(explicit(40, "Explicit"));
    let generated = context.save(EmployeeDraft::new("Generated"));

    assert_eq!(generated.id, EmployeeId::new(41));
}

#[rstest]
fn lower_explicit_id_never_rewinds_sequence(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: lower_explicit_id_never_rewinds_sequence skipped");
        return;
    };

    context.save(explicit(40, "High"));
    let generated = context.save(EmployeeDraft::new("Next"));
    assert_eq!(generated.id, EmployeeId::new(41));
    context.delete_by_id(40);
    context.delete_by_id(41);

    context.save(explicit(3, "Low"));
    let after = context.save(EmployeeDraft::new("After"));

    assert_eq!(after.id, EmployeeId::new(42));
}

#[rstest]
fn find_by_id_of_missing_row_is_none(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: find_by_id_of_missing_row_is_none skipped");
        return;
    };

    assert_eq!(context.find_by_id(7), None);
}

#[rstest]
fn find_all_is_ordered_by_id(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: find_all_is_ordered_by_id skipped");
        return;
    };

    context.save(explicit(9, "Nine"));
    context.save(explicit(2, "Two"));

    let ids: Vec<i64> = context.find_all().iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![2, 9]);
}

#[rstest]
fn delete_by_id_removes_only_that_row(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_by_id_removes_only_that_row skipped");
        return;
    };

    let ada = context.save(EmployeeDraft::new("Ada"));
    let grace = context.save(EmployeeDraft::new("Grace"));

    context.delete_by_id(ada.id.get());
    context.delete_by_id(999);

    assert_eq!(context.find_by_id(ada.id.get()), None);
    assert_eq!(context.find_all(), vec![grace]);
}

#[rstest]
fn delete_all_empties_table(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_all_empties_table skipped");
        return;
    };

    context.save(EmployeeDraft::new("Ada"));
    context.save(explicit(5, "Grace"));

    context
        .runtime
        .block_on(context.repository.delete_all())
        .expect("delete all");

    assert!(context.find_all().is_empty());
}
