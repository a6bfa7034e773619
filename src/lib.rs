pub mod shared {
    pub mod core {
        pub mod identity;
        pub mod validation;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod identity;
    }
}

pub mod modules {
    pub mod traces {
        pub mod core {
            pub mod elapsed_time;
            pub mod trace;
        }
        pub mod use_cases {
            pub mod accumulate_time {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_trace {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_traces_by_owner {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod delete_trace {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod timer_ledger;
                pub mod timer_ledger_in_memory;
                pub mod trace_store;
                pub mod trace_store_in_memory;
            }
        }
    }
    pub mod accounts {
        pub mod use_cases {
            pub mod current_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod issue_token {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
