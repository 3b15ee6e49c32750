#[cfg(test)]
mod tests {
    use crate::field::Field;
    use crate::interpolate::{InterpolateError, interpolate};
    use crate::value::SqlValue;
    use crate::{select_stmt, where_fields};
    use pretty_assertions::assert_eq;

    #[test]
    fn interpolate_basic() {
        let sql = "SELECT * FROM t WHERE a = ? AND b IN (?,?)";
        let args = [
            SqlValue::String("val".into()),
            SqlValue::I64(1),
            SqlValue::I64(2),
        ];
        assert_eq!(
            interpolate(sql, &args).unwrap(),
            "SELECT * FROM t WHERE a = 'val' AND b IN (1,2)"
        );
    }

    #[test]
    fn interpolate_generated_statement() {
        let mut q = select_stmt!("col1");
        q.from("table_name");
        where_fields!(q, Field::new("col1", vec!["v1", "v2"]));
        q.limit(10);
        let (sql, args) = q.generate().unwrap();
        assert_eq!(
            interpolate(&sql, &args).unwrap(),
            "SELECT col1 FROM table_name WHERE col1 IN ('v1','v2') LIMIT 10"
        );
    }

    #[test]
    fn question_mark_inside_quotes_is_literal() {
        let sql = "SELECT '?' FROM t WHERE a = ?";
        let args = [SqlValue::I64(7)];
        assert_eq!(
            interpolate(sql, &args).unwrap(),
            "SELECT '?' FROM t WHERE a = 7"
        );
    }

    #[test]
    fn missing_args_is_an_error() {
        assert_eq!(
            interpolate("SELECT ?, ?", &[SqlValue::I64(1)]),
            Err(InterpolateError::MissingArgs)
        );
    }

    #[test]
    fn surplus_args_are_ignored() {
        let args = [SqlValue::I64(1), SqlValue::I64(2)];
        assert_eq!(interpolate("SELECT ?", &args).unwrap(), "SELECT 1");
    }

    #[test]
    fn encodes_null_bool_and_float() {
        let args = [SqlValue::Null, SqlValue::Bool(true), SqlValue::F64(1.5)];
        assert_eq!(
            interpolate("VALUES ( ?, ?, ? )", &args).unwrap(),
            "VALUES ( NULL, TRUE, 1.5 )"
        );
    }

    #[test]
    fn escapes_quotes_in_strings() {
        let args = [SqlValue::String("O'Reilly".into())];
        assert_eq!(
            interpolate("SELECT ?", &args).unwrap(),
            "SELECT 'O\\'Reilly'"
        );
    }

    #[test]
    fn encodes_datetime() {
        let dt = time::macros::datetime!(2024-01-02 03:04:05 UTC);
        let args = [SqlValue::from(dt)];
        assert_eq!(
            interpolate("SELECT ?", &args).unwrap(),
            "SELECT '2024-01-02 03:04:05.000000'"
        );
    }
}
