//! Endpoint paths, relative to the backend origin.

pub const GET_ANSWER: &str = "/sanic/dify/get_answer";
pub const GET_DIFY_SUGGESTED: &str = "/sanic/dify/get_dify_suggested";
pub const STOP_CHAT: &str = "/sanic/dify/stop_chat";

pub const LOGIN: &str = "/sanic/user/login";
pub const QUERY_USER_RECORD: &str = "/sanic/user/query_user_record";
pub const DELETE_USER_RECORD: &str = "/sanic/user/delete_user_record";
pub const DIFY_FEAD_BACK: &str = "/sanic/user/dify_fead_back";

pub const WORD_TO_MD: &str = "/sanic/ta/word_to_md";
pub const QUERY_DEMAND_RECORDS: &str = "/sanic/ta/query_demand_records";
pub const INSERT_DEMAND_MANAGER: &str = "/sanic/ta/insert_demand_manager";
pub const DELETE_DEMAND_RECORDS: &str = "/sanic/ta/delete_demand_records";
pub const ABSTRACT_DOC_FUNC: &str = "/sanic/ta/abstract_doc_func";

pub const READ_FILE: &str = "/sanic/file/read_file";
pub const READ_FILE_COLUMN: &str = "/sanic/file/read_file_column";
pub const UPLOAD_FILE: &str = "/sanic/file/upload_file";
pub const UPLOAD_FILE_AND_PARSE: &str = "/sanic/file/upload_file_and_parse";
pub const PROCESS_FILE_LLM_OUT: &str = "/sanic/file/process_file_llm_out";
