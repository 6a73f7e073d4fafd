use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func, LikeExpr},
};

pub trait FilterContainsCi {
    /// Keep rows whose `column` contains `needle`, ignoring case.
    /// `%`, `_` and `\` in `needle` match literally.
    fn filter_contains_ci<C: ColumnTrait>(self, column: C, needle: &str) -> Self;
}

impl<E> FilterContainsCi for Select<E>
where
    E: EntityTrait,
{
    fn filter_contains_ci<C: ColumnTrait>(self, column: C, needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        self.filter(
            Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\')),
        )
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
