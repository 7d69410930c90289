//! Arrow schema conversion and serialization
//!
//! This module contains the Arrow conversion implementations for reading
//! individuals from population register batches and writing them back.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Date32Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Duration, NaiveDate};

use crate::config::PopulationConfig;
use crate::error::{KinshipError, Result};
use crate::models::core::individual::Individual;
use crate::models::core::traits::ArrowSchema;
use crate::models::core::types::Gender;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Fetch a column as Utf8, casting integer or dictionary encodings
fn string_column(batch: &RecordBatch, name: &str) -> Result<Option<StringArray>> {
    let Some(column) = batch.column_by_name(name) else {
        return Ok(None);
    };

    let column: ArrayRef = if column.data_type() == &DataType::Utf8 {
        Arc::clone(column)
    } else {
        cast(column, &DataType::Utf8)?
    };

    column
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .map(Some)
        .ok_or_else(|| KinshipError::Schema(format!("Column '{name}' is not a string column")))
}

/// Fetch a column as Date32, casting from other temporal or string encodings
fn date_column(batch: &RecordBatch, name: &str) -> Result<Option<Date32Array>> {
    let Some(column) = batch.column_by_name(name) else {
        return Ok(None);
    };

    let column: ArrayRef = if column.data_type() == &DataType::Date32 {
        Arc::clone(column)
    } else {
        cast(column, &DataType::Date32)?
    };

    column
        .as_any()
        .downcast_ref::<Date32Array>()
        .cloned()
        .map(Some)
        .ok_or_else(|| KinshipError::Schema(format!("Column '{name}' is not a date column")))
}

fn value_at(array: Option<&StringArray>, row: usize) -> Option<String> {
    let array = array?;
    if array.is_null(row) {
        return None;
    }
    let value = array.value(row).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn date_at(array: Option<&Date32Array>, row: usize) -> Option<NaiveDate> {
    let array = array?;
    if array.is_null(row) {
        return None;
    }
    epoch().checked_add_signed(Duration::days(i64::from(array.value(row))))
}

impl Individual {
    /// Decode a population batch using the column names in `config`
    ///
    /// The PNR column is required; every other column is optional.
    pub fn from_record_batch_with(
        batch: &RecordBatch,
        config: &PopulationConfig,
    ) -> Result<Vec<Self>> {
        let pnrs = string_column(batch, &config.pnr_column)?.ok_or_else(|| {
            KinshipError::Schema(format!("Required column '{}' not found", config.pnr_column))
        })?;
        let genders = string_column(batch, &config.gender_column)?;
        let fathers = string_column(batch, &config.father_column)?;
        let mothers = string_column(batch, &config.mother_column)?;
        let kinds = string_column(batch, &config.kind_column)?;
        let birth_dates = date_column(batch, &config.birth_date_column)?;

        (0..batch.num_rows())
            .map(|row| {
                let pnr = value_at(Some(&pnrs), row).ok_or_else(|| {
                    KinshipError::Schema(format!(
                        "Row {row} has no value in '{}'",
                        config.pnr_column
                    ))
                })?;

                Ok(Self {
                    pnr,
                    gender: value_at(genders.as_ref(), row)
                        .map_or(Gender::Unknown, |code| Gender::from(code.as_str())),
                    kind: value_at(kinds.as_ref(), row)
                        .unwrap_or_else(|| config.default_kind.clone()),
                    birth_date: date_at(birth_dates.as_ref(), row),
                    father_pnr: value_at(fathers.as_ref(), row),
                    mother_pnr: value_at(mothers.as_ref(), row),
                })
            })
            .collect()
    }

    /// Encode individuals using the column names in `config`
    pub fn to_record_batch_with(
        individuals: &[Self],
        config: &PopulationConfig,
    ) -> Result<RecordBatch> {
        let schema = Schema::new(vec![
            Field::new(&config.pnr_column, DataType::Utf8, false),
            Field::new(&config.gender_column, DataType::Utf8, true),
            Field::new(&config.kind_column, DataType::Utf8, true),
            Field::new(&config.birth_date_column, DataType::Date32, true),
            Field::new(&config.father_column, DataType::Utf8, true),
            Field::new(&config.mother_column, DataType::Utf8, true),
        ]);

        let pnr = StringArray::from_iter_values(individuals.iter().map(|i| i.pnr.as_str()));
        let gender = StringArray::from_iter_values(individuals.iter().map(|i| i.gender.code()));
        let kind = StringArray::from_iter_values(individuals.iter().map(|i| i.kind.as_str()));
        let birth_date: Date32Array = individuals
            .iter()
            .map(|i| {
                i.birth_date
                    .and_then(|date| i32::try_from((date - epoch()).num_days()).ok())
            })
            .collect();
        let father: StringArray = individuals.iter().map(|i| i.father_pnr.as_deref()).collect();
        let mother: StringArray = individuals.iter().map(|i| i.mother_pnr.as_deref()).collect();

        let columns: Vec<ArrayRef> = vec![
            Arc::new(pnr),
            Arc::new(gender),
            Arc::new(kind),
            Arc::new(birth_date),
            Arc::new(father),
            Arc::new(mother),
        ];

        Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
    }
}

impl ArrowSchema for Individual {
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Self::from_record_batch_with(batch, &PopulationConfig::default())
    }

    fn to_record_batch(individuals: &[Self]) -> Result<RecordBatch> {
        Self::to_record_batch_with(individuals, &PopulationConfig::default())
    }
}
