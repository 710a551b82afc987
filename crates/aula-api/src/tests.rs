//! Registry tests against a `TextStore` in a temporary directory.

use std::fs;

use aula_core::{
  attendance::AttendanceStatus,
  course::Course,
  grade::GradeStatus,
  store::FailureKind,
  student::NewStudent,
};
use aula_store_text::{StoreConfig, TextStore};
use tempfile::TempDir;

use crate::{EnrollmentRequest, Registry};

fn registry() -> (TempDir, Registry<TextStore>) {
  let dir = TempDir::new().expect("temp dir");
  let store = TextStore::open(&StoreConfig::in_dir(dir.path())).expect("open store");
  (dir, Registry::new(store))
}

fn form(first: &str, last: &str) -> NewStudent {
  NewStudent {
    first_name: first.into(),
    last_name:  last.into(),
    major:      "Ingeniería de Sistemas".into(),
    birth_date: "2002-08-15".into(),
    email:      format!("{}.{}@uni.edu.pe", first.to_lowercase(), last.to_lowercase()),
    active:     true,
  }
}

fn course(code: &str, name: &str, instructor: &str) -> Course {
  Course {
    code:       code.into(),
    name:       name.into(),
    instructor: instructor.into(),
    credits:    4,
  }
}

// ─── Students ────────────────────────────────────────────────────────────────

#[test]
fn search_students_scenario() {
  let (_dir, r) = registry();
  r.register_student(form("Ana", "Lopez")).unwrap();

  let hits = r.search_students("ana");
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].id(), "2024001");
  assert!(r.search_students("zz").is_empty());
  assert_eq!(r.search_students("  ").len(), 1);
}

#[test]
fn invalid_student_input_never_reaches_storage() {
  let (dir, r) = registry();
  let path = dir.path().join("estudiantes.txt");
  let before = fs::read(&path).unwrap();

  let mut bad = form("Ana", "Lopez");
  bad.email = "not-an-email".into();
  assert_eq!(r.register_student(bad).unwrap_err().kind, FailureKind::Validation);

  let mut bad = form("Ana", "Lopez");
  bad.first_name = "A".into();
  assert_eq!(r.register_student(bad).unwrap_err().kind, FailureKind::Validation);

  let mut bad = form("Ana", "Lopez");
  bad.birth_date = "2999-01-01".into();
  assert_eq!(r.register_student(bad).unwrap_err().kind, FailureKind::Validation);

  let mut bad = form("Ana", "Lopez");
  bad.major = "Derecho|Penal".into();
  assert_eq!(r.register_student(bad).unwrap_err().kind, FailureKind::Validation);

  assert_eq!(fs::read(&path).unwrap(), before);
  assert_eq!(r.next_student_id().unwrap(), "2024001");
}

#[test]
fn update_keeps_id_and_replaces_fields() {
  let (_dir, r) = registry();
  let ana = r.register_student(form("Ana", "Lopez")).unwrap();

  let mut changed = form("Ana María", "Lopez");
  changed.email = "ana.maria.lopez@uni.edu.pe".into();
  changed.active = false;
  let updated = r.update_student(ana.id(), changed).unwrap();
  assert_eq!(updated.id(), ana.id());
  assert_eq!(r.get_student(ana.id()).unwrap().full_name(), "Ana María Lopez");
  assert!(r.list_students(true).is_empty());
  assert_eq!(r.list_students(false).len(), 1);

  let err = r.update_student("9999999", form("Beto", "Ramos")).unwrap_err();
  assert_eq!(err.kind, FailureKind::NotFound);
}

#[test]
fn delete_missing_student_is_not_found() {
  let (_dir, r) = registry();
  let err = r.delete_student("2024001").unwrap_err();
  assert_eq!(err.kind, FailureKind::NotFound);
  assert!(err.reason.contains("2024001"));
}

#[test]
fn students_in_course_lists_active_enrolled_only() {
  let (_dir, r) = registry();
  let ana = r.register_student(form("Ana", "Lopez")).unwrap();
  let beto = r.register_student(form("Beto", "Ramos")).unwrap();
  let mut carla = form("Carla", "Diaz");
  carla.active = false;
  let carla = r.register_student(carla).unwrap();

  for s in [&ana, &beto, &carla] {
    if s.id() != beto.id() {
      r.register_enrollment(EnrollmentRequest::new(s.id(), "mat101")).unwrap();
    }
  }

  let ids: Vec<_> = r.students_in_course("MAT101").into_iter().map(|s| s.person.id).collect();
  assert_eq!(ids, vec![ana.person.id]);
}

#[test]
fn student_profile_display_info() {
  let (_dir, r) = registry();
  let ana = r.register_student(form("Ana", "Lopez")).unwrap();
  r.register_grade(ana.id(), "MAT101", [12.0, 14.0, 16.0]).unwrap();
  r.register_grade(ana.id(), "FIS200", [10.0, 10.0, 10.0]).unwrap();
  r.register_attendance(ana.id(), "MAT101", "2024-04-01", "Tardanza").unwrap();

  let profile = r.student_profile(ana.id()).unwrap();
  assert_eq!(profile.grades.len(), 2);
  assert_eq!(profile.count_with_status(AttendanceStatus::Tardanza), 1);
  assert_eq!(
    profile.display_info(),
    "ID: 2024001 | Nombre: Ana Lopez | Carrera: Ingeniería de Sistemas | Promedio: 12.00"
  );
  assert_eq!(r.student_profile("nope").unwrap_err().kind, FailureKind::NotFound);
}

#[test]
fn majors_default_when_file_missing() {
  let (_dir, r) = registry();
  assert_eq!(
    r.list_majors(),
    vec!["Ingeniería de Sistemas", "Administración", "Contabilidad"]
  );
}

// ─── Courses ─────────────────────────────────────────────────────────────────

#[test]
fn course_input_is_normalised() {
  let (_dir, r) = registry();
  let c = r
    .register_course(course(" mat101 ", "calculo   diferencial", "juan PEREZ"))
    .unwrap();
  assert_eq!(c.code, "MAT101");
  assert_eq!(c.name, "Calculo Diferencial");
  assert_eq!(c.instructor, "Juan Perez");
  assert_eq!(r.get_course("mat101").unwrap(), c);
}

#[test]
fn course_scenario_preserves_fields() {
  let (_dir, r) = registry();
  r.register_course(course("MAT101", "Calculo I", "J. Perez")).unwrap();
  assert_eq!(r.list_courses(), vec![course("MAT101", "Calculo I", "J. Perez")]);
}

#[test]
fn duplicate_course_is_reported() {
  let (_dir, r) = registry();
  r.register_course(course("MAT101", "Calculo I", "J. Perez")).unwrap();
  let err = r
    .register_course(course("mat101", "Otro Curso", "X"))
    .unwrap_err();
  assert_eq!(err.kind, FailureKind::Duplicate);
  assert_eq!(r.search_courses("perez").len(), 1);
}

#[test]
fn update_and_delete_course() {
  let (_dir, r) = registry();
  r.register_course(course("MAT101", "Calculo I", "J. Perez")).unwrap();
  r.update_course(course("mat101", "calculo ii", "j. perez")).unwrap();
  assert_eq!(r.get_course("MAT101").unwrap().name, "Calculo Ii");

  r.delete_course("mat101").unwrap();
  assert_eq!(r.get_course("MAT101").unwrap_err().kind, FailureKind::NotFound);
}

// ─── Enrollments ─────────────────────────────────────────────────────────────

#[test]
fn enrollment_defaults_and_duplicates() {
  let (_dir, r) = registry();
  let e = r
    .register_enrollment(EnrollmentRequest::new("2024001", "mat101"))
    .unwrap();
  assert_eq!(e.course_code, "MAT101");
  assert_eq!(e.period, "2024-1");
  assert_eq!(e.status, "Matriculado");
  assert_eq!(e.date.len(), 10);

  let err = r
    .register_enrollment(EnrollmentRequest::new("2024001", "MAT101"))
    .unwrap_err();
  assert_eq!(err.kind, FailureKind::Duplicate);
  assert_eq!(r.list_enrollments().len(), 1);
  assert!(r.enrollment_exists("2024001", "mat101"));
}

#[test]
fn enrollment_with_explicit_fields() {
  let (_dir, r) = registry();
  let request = EnrollmentRequest {
    date: Some("2024-08-20".into()),
    period: Some("2024-2".into()),
    status: Some("  ".into()),
    ..EnrollmentRequest::new("2024001", "MAT101")
  };
  let e = r.register_enrollment(request).unwrap();
  assert_eq!(e.date, "2024-08-20");
  assert_eq!(e.period, "2024-2");
  assert_eq!(e.status, "Matriculado");

  let bad = EnrollmentRequest {
    date: Some("20/08/2024".into()),
    ..EnrollmentRequest::new("2024002", "MAT101")
  };
  assert_eq!(r.register_enrollment(bad).unwrap_err().kind, FailureKind::Validation);
}

#[test]
fn enrollment_views_fall_back_to_raw_keys() {
  let (_dir, r) = registry();
  let ana = r.register_student(form("Ana", "Lopez")).unwrap();
  r.register_course(course("MAT101", "Calculo I", "J. Perez")).unwrap();
  r.register_enrollment(EnrollmentRequest::new(ana.id(), "MAT101")).unwrap();
  r.register_enrollment(EnrollmentRequest::new("2099999", "QUI300")).unwrap();

  let views = r.list_enrollments();
  assert_eq!(views[0].student_name, "Ana Lopez");
  assert_eq!(views[0].course_name, "Calculo I");
  assert_eq!(views[1].student_name, "2099999");
  assert_eq!(views[1].course_name, "QUI300");

  assert_eq!(r.search_enrollments("calculo").len(), 1);
  r.delete_enrollment("2099999", "qui300").unwrap();
  assert_eq!(r.list_enrollments().len(), 1);
}

// ─── Grades ──────────────────────────────────────────────────────────────────

#[test]
fn grade_upsert_through_registry() {
  let (_dir, r) = registry();
  r.register_grade("2024001", "MAT101", [10.0, 10.0, 10.0]).unwrap();
  r.register_grade("2024001", "mat101", [20.0, 20.0, 20.0]).unwrap();

  let grades = r.list_grades();
  assert_eq!(grades.len(), 1);
  assert_eq!(grades[0].average, 20.0);
  assert_eq!(grades[0].status, GradeStatus::Aprobado);
}

#[test]
fn out_of_range_grade_is_validation_failure() {
  let (_dir, r) = registry();
  let err = r.register_grade("2024001", "MAT101", [21.0, 10.0, 10.0]).unwrap_err();
  assert_eq!(err.kind, FailureKind::Validation);
  assert!(r.register_grade("2024001", "MAT101", [f64::NAN, 1.0, 1.0]).is_err());
  assert!(r.list_grades().is_empty());
}

#[test]
fn grade_filters_and_delete() {
  let (_dir, r) = registry();
  r.register_grade("2024001", "MAT101", [12.0, 12.0, 12.0]).unwrap();
  r.register_grade("2024002", "MAT101", [8.0, 9.0, 10.0]).unwrap();
  r.register_grade("2024001", "FIS200", [15.0, 15.0, 15.0]).unwrap();

  assert_eq!(r.grades_for_course("mat101").len(), 2);
  assert_eq!(r.grades_for_student("2024001").len(), 2);
  let failing = r.grades_for_student("2024002");
  assert_eq!(failing[0].status, GradeStatus::Desaprobado);

  r.delete_grade("2024002", "MAT101").unwrap();
  assert_eq!(r.delete_grade("2024002", "MAT101").unwrap_err().kind, FailureKind::NotFound);
}

// ─── Attendance ──────────────────────────────────────────────────────────────

#[test]
fn attendance_status_lookup_and_replace() {
  let (_dir, r) = registry();
  assert_eq!(r.attendance_status("2024001", "MAT101", "2024-04-01"), None);

  r.register_attendance("2024001", "MAT101", "2024-04-01", "Presente").unwrap();
  r.register_attendance("2024002", "MAT101", "2024-04-01", "Ausente").unwrap();
  r.register_attendance("2024001", "mat101", "2024-04-01", "Tardanza").unwrap();

  assert_eq!(
    r.attendance_status("2024001", "MAT101", "2024-04-01"),
    Some(AttendanceStatus::Tardanza)
  );
  assert_eq!(r.attendance_for_course("MAT101", "2024-04-01").len(), 2);
  assert!(r.attendance_for_course("MAT101", "2024-04-02").is_empty());
  assert_eq!(r.search_attendance("ausente").len(), 1);

  r.delete_attendance("2024002", "MAT101", "2024-04-01").unwrap();
  assert_eq!(r.list_attendance().len(), 1);
}

#[test]
fn unknown_attendance_status_is_rejected() {
  let (_dir, r) = registry();
  let err = r
    .register_attendance("2024001", "MAT101", "2024-04-01", "Falta")
    .unwrap_err();
  assert_eq!(err.kind, FailureKind::Validation);
  assert!(r.list_attendance().is_empty());
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[test]
fn dashboard_summary() {
  let (_dir, r) = registry();
  let empty = r.dashboard();
  assert_eq!(empty.overall_average, 0.0);
  assert!(empty.recent_grades.is_empty());

  r.register_student(form("Ana", "Lopez")).unwrap();
  let mut beto = form("Beto", "Ramos");
  beto.active = false;
  r.register_student(beto).unwrap();
  r.register_course(course("MAT101", "Calculo I", "J. Perez")).unwrap();

  for i in 0..12 {
    let score = f64::from(i);
    r.register_grade(&format!("20240{i:02}"), "MAT101", [score, score, score])
      .unwrap();
  }

  let d = r.dashboard();
  assert_eq!(d.active_students, 1);
  assert_eq!(d.courses, 1);
  assert_eq!(d.overall_average, 5.5);
  assert_eq!(d.at_risk, 11);
  assert_eq!(d.recent_grades.len(), 10);
  assert_eq!(d.recent_grades[0].grade.student_id(), "2024011");
  assert_eq!(d.recent_grades[9].grade.student_id(), "2024002");
}
