pub mod application {
    pub mod exercise {
        pub mod delete;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod session;
    pub mod exercise {
        pub mod errors;
        pub mod gateway;
        pub mod messages;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete;
        }
    }
}
