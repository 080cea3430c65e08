fn main() {
    multiversx_sc_meta_lib::cli_main::<governance_token::AbiProvider>();
}
