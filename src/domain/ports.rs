/// Source of the three settings that decide where a hook comes from and goes to.
pub trait ConfigProvider {
    fn hook_name(&self) -> &str;
    fn staging_dir(&self) -> &str;
    fn hooks_dir(&self) -> &str;
}
