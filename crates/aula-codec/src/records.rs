//! [`LineCodec`] implementations for every stored entity.

use aula_core::{
  attendance::{Attendance, AttendanceStatus},
  course::Course,
  enrollment::{DEFAULT_PERIOD, DEFAULT_STATUS, Enrollment},
  grade::Grade,
  student::{PersonData, Student},
};

use crate::{
  LineCodec, Result,
  schema::{Column, FieldDefault, Row, Schema},
};

fn encode_flag(value: bool) -> String { String::from(if value { "1" } else { "0" }) }

fn encode_decimal(value: f64) -> String { value.to_string() }

// ─── Student ─────────────────────────────────────────────────────────────────

const STUDENT: Schema = Schema {
  columns: &[
    Column::text("ID"),
    Column::text("NOMBRE"),
    Column::text("APELLIDO"),
    Column::text("CARRERA"),
    Column::text("NACIMIENTO"),
    Column::text("CORREO"),
    Column::new("ACTIVO", FieldDefault::Flag(true)),
  ],
  key:     &[0],
};

impl LineCodec for Student {
  const SCHEMA: &'static Schema = &STUDENT;

  fn from_row(row: &Row<'_>) -> Result<Self> {
    Ok(Student {
      person:     PersonData {
        id:         row.text(0),
        first_name: row.text(1),
        last_name:  row.text(2),
      },
      major:      row.text(3),
      birth_date: row.text(4),
      email:      row.text(5),
      active:     row.flag(6),
    })
  }

  fn to_fields(&self) -> Vec<String> {
    vec![
      self.person.id.clone(),
      self.person.first_name.clone(),
      self.person.last_name.clone(),
      self.major.clone(),
      self.birth_date.clone(),
      self.email.clone(),
      encode_flag(self.active),
    ]
  }
}

// ─── Course ──────────────────────────────────────────────────────────────────

const COURSE: Schema = Schema {
  columns: &[
    Column::text("CODIGO"),
    Column::text("NOMBRE"),
    Column::text("PROFESOR"),
    Column::new("CREDITOS", FieldDefault::Integer(0)),
  ],
  key:     &[0],
};

impl LineCodec for Course {
  const SCHEMA: &'static Schema = &COURSE;

  fn from_row(row: &Row<'_>) -> Result<Self> {
    let credits = u32::try_from(row.integer(3)?).map_err(|_| row.malformed(3))?;
    Ok(Course {
      code: row.text(0),
      name: row.text(1),
      instructor: row.text(2),
      credits,
    })
  }

  fn to_fields(&self) -> Vec<String> {
    vec![
      self.code.clone(),
      self.name.clone(),
      self.instructor.clone(),
      self.credits.to_string(),
    ]
  }
}

// ─── Enrollment ──────────────────────────────────────────────────────────────

const ENROLLMENT: Schema = Schema {
  columns: &[
    Column::text("ID_ESTUDIANTE"),
    Column::text("CODIGO_CURSO"),
    Column::text("FECHA"),
    Column::new("PERIODO", FieldDefault::Text(DEFAULT_PERIOD)),
    Column::new("ESTADO", FieldDefault::Text(DEFAULT_STATUS)),
  ],
  key:     &[0, 1],
};

impl LineCodec for Enrollment {
  const SCHEMA: &'static Schema = &ENROLLMENT;

  fn from_row(row: &Row<'_>) -> Result<Self> {
    Ok(Enrollment {
      student_id:  row.text(0),
      course_code: row.text(1),
      date:        row.text(2),
      period:      row.text(3),
      status:      row.text(4),
    })
  }

  fn to_fields(&self) -> Vec<String> {
    vec![
      self.student_id.clone(),
      self.course_code.clone(),
      self.date.clone(),
      self.period.clone(),
      self.status.clone(),
    ]
  }
}

// ─── Grade ───────────────────────────────────────────────────────────────────

const GRADE: Schema = Schema {
  columns: &[
    Column::text("ID_ESTUDIANTE"),
    Column::text("CODIGO_CURSO"),
    Column::new("NOTA1", FieldDefault::Decimal(0.0)),
    Column::new("NOTA2", FieldDefault::Decimal(0.0)),
    Column::new("NOTA3", FieldDefault::Decimal(0.0)),
    Column::new("PROMEDIO", FieldDefault::Decimal(0.0)),
  ],
  key:     &[0, 1],
};

impl LineCodec for Grade {
  const SCHEMA: &'static Schema = &GRADE;

  /// `PROMEDIO` is written for readers of the file but recomputed here.
  fn from_row(row: &Row<'_>) -> Result<Self> {
    let scores = [row.decimal(2)?, row.decimal(3)?, row.decimal(4)?];
    Ok(Grade::new(row.text(0), row.text(1), scores)?)
  }

  fn to_fields(&self) -> Vec<String> {
    let [n1, n2, n3] = self.scores();
    vec![
      self.student_id().to_owned(),
      self.course_code().to_owned(),
      encode_decimal(n1),
      encode_decimal(n2),
      encode_decimal(n3),
      format!("{:.2}", self.average()),
    ]
  }
}

// ─── Attendance ──────────────────────────────────────────────────────────────

const ATTENDANCE: Schema = Schema {
  columns: &[
    Column::text("ID_ESTUDIANTE"),
    Column::text("CODIGO_CURSO"),
    Column::text("FECHA"),
    Column::new("ESTADO", FieldDefault::Text("Presente")),
  ],
  key:     &[0, 1, 2],
};

impl LineCodec for Attendance {
  const SCHEMA: &'static Schema = &ATTENDANCE;

  fn from_row(row: &Row<'_>) -> Result<Self> {
    Ok(Attendance {
      student_id:  row.text(0),
      course_code: row.text(1),
      date:        row.text(2),
      status:      AttendanceStatus::parse(row.text(3).trim())?,
    })
  }

  fn to_fields(&self) -> Vec<String> {
    vec![
      self.student_id.clone(),
      self.course_code.clone(),
      self.date.clone(),
      self.status.to_string(),
    ]
  }
}
