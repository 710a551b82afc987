//! Text and JSON rendering of registry results.

use std::io::{self, Write};

use anyhow::Result;
use aula_api::Dashboard;
use aula_core::{
  attendance::Attendance,
  course::Course,
  enrollment::Enrollment,
  grade::Grade,
  student::Student,
  view::{AttendanceView, EnrollmentView, GradeView, StudentProfile},
};
use serde::Serialize;

/// One-record text rendering used when `--json` is off.
pub trait Render {
  fn render(&self) -> String;
}

/// Where command results go.
#[derive(Debug, Clone, Copy)]
pub struct Output {
  pub json: bool,
}

impl Output {
  pub fn one<T: Serialize + Render>(&self, item: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    if self.json {
      serde_json::to_writer_pretty(&mut out, item)?;
      writeln!(out)?;
    } else {
      writeln!(out, "{}", item.render())?;
    }
    Ok(())
  }

  pub fn list<T: Serialize + Render>(&self, items: &[T]) -> Result<()> {
    let mut out = io::stdout().lock();
    if self.json {
      serde_json::to_writer_pretty(&mut out, items)?;
      writeln!(out)?;
      return Ok(());
    }
    if items.is_empty() {
      writeln!(out, "(none)")?;
    }
    for item in items {
      writeln!(out, "{}", item.render())?;
    }
    Ok(())
  }
}

// ─── Impls ───────────────────────────────────────────────────────────────────

impl Render for String {
  fn render(&self) -> String { self.clone() }
}

impl Render for Student {
  fn render(&self) -> String {
    format!(
      "{} | Carrera: {} | Nacimiento: {} | Correo: {} | {}",
      self.person.display_info(),
      self.major,
      self.birth_date,
      self.email,
      if self.active { "Activo" } else { "Inactivo" }
    )
  }
}

impl Render for Course {
  fn render(&self) -> String {
    format!(
      "{} | {} | {} | {} créditos",
      self.code, self.name, self.instructor, self.credits
    )
  }
}

impl Render for Enrollment {
  fn render(&self) -> String {
    format!(
      "{} -> {} | {} | {} | {}",
      self.student_id, self.course_code, self.date, self.period, self.status
    )
  }
}

impl Render for EnrollmentView {
  fn render(&self) -> String {
    format!(
      "{} ({}) -> {} ({}) | {} | {} | {}",
      self.student_name,
      self.enrollment.student_id,
      self.course_name,
      self.enrollment.course_code,
      self.enrollment.date,
      self.enrollment.period,
      self.enrollment.status
    )
  }
}

impl Render for Grade {
  fn render(&self) -> String {
    let [n1, n2, n3] = self.scores();
    format!(
      "{} | {} | {n1} {n2} {n3} | {:.2} | {}",
      self.student_id(),
      self.course_code(),
      self.average(),
      self.status()
    )
  }
}

impl Render for GradeView {
  fn render(&self) -> String {
    let [n1, n2, n3] = self.grade.scores();
    format!(
      "{} | {} | {n1} {n2} {n3} | {:.2} | {}",
      self.student_name, self.course_name, self.average, self.status
    )
  }
}

impl Render for Attendance {
  fn render(&self) -> String {
    format!(
      "{} | {} | {} | {}",
      self.student_id, self.course_code, self.date, self.status
    )
  }
}

impl Render for AttendanceView {
  fn render(&self) -> String {
    format!(
      "{} | {} | {} | {}",
      self.student_name, self.course_name, self.attendance.date, self.attendance.status
    )
  }
}

impl Render for StudentProfile {
  fn render(&self) -> String {
    let mut text = self.display_info();
    for (code, average) in &self.grades {
      text.push_str(&format!("\n  {code}: {average:.2}"));
    }
    for a in &self.attendance {
      text.push_str(&format!("\n  {} {}: {}", a.date, a.course_code, a.status));
    }
    text
  }
}

impl Render for Dashboard {
  fn render(&self) -> String {
    let mut text = format!(
      "Estudiantes activos: {}\nCursos: {}\nPromedio general: {:.2}\nEn riesgo: {}",
      self.active_students, self.courses, self.overall_average, self.at_risk
    );
    if !self.recent_grades.is_empty() {
      text.push_str("\nÚltimas notas:");
      for g in &self.recent_grades {
        text.push_str("\n  ");
        text.push_str(&g.render());
      }
    }
    text
  }
}
