pub mod config;

pub mod shared {
    pub mod infrastructure {
        pub mod metrics;
    }
}

pub mod modules {
    pub mod customer_records {
        pub mod core {
            pub mod change_request;
            pub mod operation;
            pub mod process_result;
            pub mod record;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod insert_record {
                pub mod handler;
            }
            pub mod delete_record {
                pub mod handler;
            }
            pub mod process_change {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod record_store;
                pub mod record_table;
                pub mod record_table_in_memory;
            }
        }
    }
}

pub mod shell;
