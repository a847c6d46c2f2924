pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod rename;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod refresh;
        pub mod update;
    }
    pub(crate) mod remote;
    pub mod session {
        pub mod login;
    }
    pub mod view_model;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod rename;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod report;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod refresh;
            pub mod update;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod sync {
        pub mod errors;
        pub mod mapper;
        pub mod model;
        pub mod services;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
