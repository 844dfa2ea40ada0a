use crate::models::{OperationMode, QueryParam, RequestSpec, ResourceKind, SampleRow};

/// Endpoint path and `(query param, column index)` list for one
/// (kind, mode) pair. Indices point into [`ResourceKind::columns`].
/// Parameter order is the order sent on the wire.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub params: &'static [(&'static str, usize)],
}

pub fn route(kind: ResourceKind, mode: OperationMode) -> Route {
    use OperationMode::{Read, Write};
    use ResourceKind::{Detail, Reservation, Review};

    match (kind, mode) {
        (Detail, Write) => Route {
            path: "/post-detail",
            params: &[
                ("restaurant_name", 0),
                ("location", 1),
                ("style", 2),
                ("capacity", 3),
            ],
        },
        (Detail, Read) => Route {
            path: "/get-detail",
            params: &[("restaurant_name", 0)],
        },
        (Review, Write) => Route {
            path: "/post-review",
            params: &[
                ("user_name", 0),
                ("restaurant_name", 1),
                ("review", 2),
                ("rating", 3),
            ],
        },
        (Review, Read) => Route {
            path: "/get-review",
            params: &[("restaurant_name", 1)],
        },
        (Reservation, Write) => Route {
            path: "/make-reservation",
            params: &[
                ("user_name", 0),
                ("restaurant_name", 1),
                ("year", 2),
                ("month", 3),
                ("day", 4),
            ],
        },
        (Reservation, Read) => Route {
            path: "/get-reservation",
            params: &[("user_name", 0)],
        },
    }
}

/// Build the request for one sample row. The resource kind is the row's own.
pub fn build(mode: OperationMode, row: &SampleRow) -> RequestSpec {
    let kind = row.kind();
    let r = route(kind, mode);

    let params = r
        .params
        .iter()
        .map(|&(name, idx)| QueryParam {
            name,
            value: row.value_at(idx).to_string(),
        })
        .collect();

    RequestSpec::new(kind, mode, r.path, params)
}
