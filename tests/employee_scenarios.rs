use std::{collections::HashSet, sync::Arc, thread};

use entity::{Employee, Identifiable};
use products_hr::{ServiceError, ValidationError};
use suite_tests::{fresh_service, hire};

#[test]
fn hire_then_promote_keeps_the_same_id() {
    let service = fresh_service();
    let id = hire(&service, "Pedro Alvares", "Gerente de Projetos");

    let listed = service.list_all().unwrap();
    assert!(
        listed
            .iter()
            .any(|e| e.name() == "Pedro Alvares" && e.role() == "Gerente de Projetos")
    );

    service
        .update(Employee::new(id, "Pedro Alvares", "Tech Lead", 0.0))
        .unwrap();

    let listed = service.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), id);
    assert_eq!(listed[0].role(), "Tech Lead");
}

#[test]
fn oversized_name_is_refused_with_the_limit_in_the_message() {
    let service = fresh_service();
    let err = service
        .add(Employee::new(service.next_id().unwrap(), "A".repeat(51), "Avaliador", 0.0))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::TooLong { max: 50 })
    ));
    assert!(err.to_string().contains("50"));
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn update_touches_only_the_matching_record() {
    let service = fresh_service();
    let ana = hire(&service, "Ana Carolina", "Desenvolvedora Júnior");
    let pedro = hire(&service, "Pedro Alvares", "Gerente de Projetos");
    let before = service.find_by_id(pedro).unwrap();

    service
        .update(Employee::new(ana, "Ana Carolina", "Desenvolvedora Plena", 0.0))
        .unwrap();

    assert_eq!(service.find_by_id(pedro).unwrap(), before);
    assert_eq!(
        service.find_by_id(ana).unwrap().unwrap().role(),
        "Desenvolvedora Plena"
    );
}

#[test]
fn deleting_an_absent_id_leaves_the_store_alone() {
    let service = fresh_service();
    hire(&service, "Clara Oliveira", "Analista de QA");
    let before = service.list_all().unwrap();

    service.delete(999).unwrap();

    assert_eq!(service.list_all().unwrap(), before);
    assert!(service.find_by_id(999).unwrap().is_none());
}

#[test]
fn concurrent_hires_all_land_with_distinct_ids() {
    let service = Arc::new(fresh_service());
    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let service = service.clone();
            thread::spawn(move || {
                for n in 0..25 {
                    hire(&service, &format!("Worker {worker}-{n}"), "Operador");
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let all = service.list_all().unwrap();
    assert_eq!(all.len(), 100);
    let ids: HashSet<i64> = all.iter().map(|e| e.id()).collect();
    assert_eq!(ids.len(), 100);
}
