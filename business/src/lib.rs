pub mod application {
    pub mod movie {
        pub mod create;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod diagnostics;
    pub mod errors;
    pub mod logger;
    pub mod validator;
    pub mod movie {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod rules;
        pub mod runtime;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_id;
        }
    }
}
