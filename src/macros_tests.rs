#[cfg(test)]
mod tests {
    use crate::field::Field;
    use crate::value::SqlValue;
    use crate::{insert_stmt, select_stmt, set_fields, where_fields};
    use pretty_assertions::assert_eq;

    #[test]
    fn select_stmt_without_cols_projects_star() {
        let (sql, _args) = select_stmt!().from("t").generate().unwrap();
        assert_eq!(sql, "SELECT * FROM t");
    }

    #[test]
    fn select_stmt_joins_cols() {
        let (sql, _args) = select_stmt!("a", "b", "c").from("t").generate().unwrap();
        assert_eq!(sql, "SELECT a, b, c FROM t");
    }

    #[test]
    fn select_stmt_accepts_trailing_comma() {
        let (sql, _args) = select_stmt!("a", "b",).from("t").generate().unwrap();
        assert_eq!(sql, "SELECT a, b FROM t");
    }

    #[test]
    fn insert_stmt_mixed_value_types() {
        let q = insert_stmt!("t", "name" => "bob", "age" => 30_i64, "score" => 1.5_f64);
        let (sql, args) = q.generate().unwrap();
        assert_eq!(sql, "INSERT INTO t ( name, age, score ) VALUES ( ?, ?, ? )");
        assert_eq!(
            args,
            vec![
                SqlValue::String("bob".into()),
                SqlValue::I64(30),
                SqlValue::F64(1.5),
            ]
        );
    }

    #[test]
    fn where_and_set_macros_accept_field_lists() {
        let mut q = crate::update("t");
        set_fields!(q, [Field::new("a", 1_i64), Field::new("b", 2_i64)]);
        where_fields!(q, vec![Field::new("c", 3_i64)]);
        let (sql, args) = q.generate().unwrap();
        assert_eq!(sql, "UPDATE t SET a = ?, b = ? WHERE c = ?");
        assert_eq!(
            args,
            vec![SqlValue::I64(1), SqlValue::I64(2), SqlValue::I64(3)]
        );
    }
}
